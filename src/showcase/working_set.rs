use crate::models::Property;

/// Records shown across the carousel and the map
///
/// `revision` is bumped on every rebuild so observers can react to a new set
/// even when its contents happen to be equal to the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet {
    revision: u64,
    properties: Vec<Property>,
}

impl WorkingSet {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Swaps in a freshly built set
    pub fn replace(&mut self, properties: Vec<Property>) {
        self.revision += 1;
        self.properties = properties;
    }
}
