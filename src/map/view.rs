use crate::map::bounds::LatLngBounds;
use crate::models::LatLng;
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// Slippy-map tile template used by front ends rendering the sales map
pub const TILE_URL_TEMPLATE: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 38.97,
    lng: -0.15,
};
pub const DEFAULT_ZOOM: u8 = 11;

/// Pixel margin kept around fitted bounds
pub const FIT_PADDING: Padding = Padding { x: 50, y: 50 };

const TILE_SIZE: f64 = 256.0;
const MAX_MERCATOR_SIN: f64 = 0.9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub x: u32,
    pub y: u32,
}

/// What the map is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Map widget that can be told to frame a region
pub trait MapView {
    fn viewport(&self) -> Viewport;

    /// Centers and zooms so `bounds` is fully visible inside `padding`
    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Padding);
}

/// Map without a renderer; tracks the viewport a real widget would show
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    width: u32,
    height: u32,
    min_zoom: u8,
    max_zoom: u8,
    viewport: Viewport,
}

impl HeadlessMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            min_zoom: 0,
            max_zoom: 18,
            viewport: Viewport::default(),
        }
    }

    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom;
        self
    }

    /// Largest zoom at which `bounds` fits inside the padded map area
    fn bounds_zoom(&self, bounds: &LatLngBounds, padding: Padding) -> u8 {
        let (west, north) = project(LatLng::new(bounds.north_east.lat, bounds.south_west.lng));
        let (east, south) = project(LatLng::new(bounds.south_west.lat, bounds.north_east.lng));
        let span_x = (east - west).abs();
        let span_y = (south - north).abs();

        let avail_x = f64::from(self.width.saturating_sub(padding.x * 2).max(1));
        let avail_y = f64::from(self.height.saturating_sub(padding.y * 2).max(1));

        let scale_x = if span_x > 0.0 { avail_x / span_x } else { f64::INFINITY };
        let scale_y = if span_y > 0.0 { avail_y / span_y } else { f64::INFINITY };
        let scale = scale_x.min(scale_y);

        if scale.is_infinite() {
            return self.max_zoom;
        }

        let zoom = scale.log2().floor();
        zoom.clamp(f64::from(self.min_zoom), f64::from(self.max_zoom)) as u8
    }
}

impl MapView for HeadlessMap {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Padding) {
        let center = if bounds.is_point() {
            bounds.south_west
        } else {
            let (x1, y1) = project(bounds.south_west);
            let (x2, y2) = project(bounds.north_east);
            unproject((x1 + x2) / 2.0, (y1 + y2) / 2.0)
        };
        let zoom = self.bounds_zoom(bounds, padding);

        debug!(
            "Viewport fitted to ({:.4}, {:.4}) at zoom {}",
            center.lat, center.lng, zoom
        );
        self.viewport = Viewport { center, zoom };
    }
}

/// Web Mercator projection to pixel space at zoom 0
fn project(point: LatLng) -> (f64, f64) {
    let x = (point.lng + 180.0) / 360.0 * TILE_SIZE;
    let sin = point
        .lat
        .to_radians()
        .sin()
        .clamp(-MAX_MERCATOR_SIN, MAX_MERCATOR_SIN);
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * TILE_SIZE;
    (x, y)
}

fn unproject(x: f64, y: f64) -> LatLng {
    let lng = x / TILE_SIZE * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / TILE_SIZE;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}
