use ahash::AHashMap;
use derive_getters::{Dissolve, Getters};

use super::region::Region;

/// One BED track directive: free-form metadata plus the regions grouped under it.
///
/// Metadata keys and values are not validated. Regions are appended by the caller
/// and never removed; track membership is maintained independently from the
/// per-chromosome map of [`Bed`](super::Bed).
#[derive(Debug, Clone, Default, Getters, Dissolve)]
pub struct Track {
    fields: AHashMap<String, String>,
    regions: Vec<Region>,
}

impl Track {
    pub fn new(fields: AHashMap<String, String>) -> Self {
        Self {
            fields,
            regions: Vec::new(),
        }
    }

    pub fn push_region(&mut self, region: Region) {
        self.regions.push(region);
    }
}
