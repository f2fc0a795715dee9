use crate::map::bounds::{located_bounds, LatLngBounds};
use crate::map::view::{MapView, Padding, FIT_PADDING};
use crate::showcase::WorkingSet;
use tracing::{debug, info};

/// Keeps the map framed on the working set
///
/// Re-fits once per working-set revision, so a refreshed set is framed again
/// while repeated notifications about the same set are no-ops.
#[derive(Debug, Clone)]
pub struct BoundsSynchronizer {
    padding: Padding,
    applied_revision: Option<u64>,
}

impl BoundsSynchronizer {
    pub fn new(padding: Padding) -> Self {
        Self {
            padding,
            applied_revision: None,
        }
    }

    /// Returns the bounds handed to the map, if a fit was issued
    pub fn sync(&mut self, working: &WorkingSet, map: &mut dyn MapView) -> Option<LatLngBounds> {
        if self.applied_revision == Some(working.revision()) {
            return None;
        }
        self.applied_revision = Some(working.revision());

        let Some(bounds) = located_bounds(working.properties()) else {
            debug!(
                "No located properties in working set revision {}, keeping viewport",
                working.revision()
            );
            return None;
        };

        map.fit_bounds(&bounds, self.padding);
        info!(
            "Map fitted to {} properties (revision {})",
            working.properties().iter().filter(|p| p.coordinates().is_some()).count(),
            working.revision()
        );
        Some(bounds)
    }
}

impl Default for BoundsSynchronizer {
    fn default() -> Self {
        Self::new(FIT_PADDING)
    }
}
