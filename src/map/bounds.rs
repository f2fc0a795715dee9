use crate::models::{LatLng, Property};

/// Axis-aligned geographic box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Minimal box enclosing `points`, `None` when there are none
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    /// Degenerate box around a single location
    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }
}

/// Bounds over every record that has usable coordinates
pub fn located_bounds(properties: &[Property]) -> Option<LatLngBounds> {
    LatLngBounds::from_points(properties.iter().filter_map(Property::coordinates))
}
