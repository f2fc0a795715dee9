use crate::models::{LatLng, ListingStatus, Property};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: u32,
    pub weight: u32,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f32,
}

impl MarkerStyle {
    pub fn resting() -> Self {
        Self {
            radius: 8,
            weight: 2,
            color: "#000",
            fill_color: "#000",
            fill_opacity: 1.0,
        }
    }

    /// Resting marker for a listing with the given status
    pub fn for_status(status: &ListingStatus) -> Self {
        match status {
            ListingStatus::Reserved => Self {
                color: "#9CA3AF",
                fill_color: "#9CA3AF",
                ..Self::resting()
            },
            _ => Self::resting(),
        }
    }

    /// Enlarged, hollow marker for the card under the pointer
    pub fn highlighted(self) -> Self {
        Self {
            radius: 12,
            weight: 4,
            fill_color: "#FFFFFF",
            ..self
        }
    }
}

/// Circle marker for one located property, keyed by property id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup_title: String,
    pub popup_location: String,
}

/// Markers for the records that have coordinates, in working-set order
pub fn markers(working: &[Property], hovered_id: Option<&str>) -> Vec<Marker> {
    working
        .iter()
        .filter_map(|property| {
            let position = property.coordinates()?;
            let style = MarkerStyle::for_status(&property.status);
            let style = if hovered_id == Some(property.id.as_str()) {
                style.highlighted()
            } else {
                style
            };

            Some(Marker {
                id: property.id.clone(),
                position,
                style,
                popup_title: property.title.clone(),
                popup_location: property.location.clone(),
            })
        })
        .collect()
}
