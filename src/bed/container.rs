use ahash::AHashMap;
use derive_getters::{Dissolve, Getters};
use itertools::Itertools;

use super::region::Region;
use super::track::Track;
use crate::symbols::Symbol;

/// Top-level in-memory model of a BED file: tracks in file order plus a map from
/// chromosome symbol to the regions on it.
///
/// Mutation goes through [`add_track`](Self::add_track) and
/// [`add_region`](Self::add_region) only; there is no internal synchronization, so
/// concurrent callers must impose their own mutual exclusion. Buckets stay in
/// insertion order until [`sort_regions`](Self::sort_regions) runs, which is meant
/// to happen once after bulk loading; consumers are expected to treat the container
/// as read-only afterwards.
#[derive(Debug, Clone, Default, Getters, Dissolve)]
pub struct Bed {
    tracks: Vec<Track>,
    regions: AHashMap<Symbol, Vec<Region>>,
}

impl Bed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track, keeping file order.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Append a region to its chromosome's bucket, creating the bucket on first
    /// use. Never deduplicates; call order within a bucket is preserved.
    pub fn add_region(&mut self, region: Region) {
        self.regions
            .entry(region.chrom().clone())
            .or_default()
            .push(region);
    }

    /// Stably reorder every chromosome's bucket by start coordinate. Regions with
    /// equal starts keep their relative insertion order.
    pub fn sort_regions(&mut self) {
        for regions in self.regions.values_mut() {
            regions.sort_by_key(|region| *region.start());
        }
        log::debug!("Sorted BED regions across {} chromosomes", self.regions.len());
    }

    /// All regions on the given chromosome, or an empty slice for unknown ones.
    pub fn chrom_regions(&self, chrom: &Symbol) -> &[Region] {
        self.regions.get(chrom).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Chromosomes with at least one region, ordered by name.
    pub fn chroms(&self) -> Vec<&Symbol> {
        self.regions
            .keys()
            .sorted_by(|left, right| left.as_str().cmp(right.as_str()))
            .collect()
    }

    /// Regions on `chrom` whose half-open span intersects `[start, end)`.
    /// Valid on sorted and unsorted containers alike.
    pub fn overlapping(
        &self,
        chrom: &Symbol,
        start: i64,
        end: i64,
    ) -> impl Iterator<Item = &Region> {
        self.chrom_regions(chrom)
            .iter()
            .filter(move |region| *region.start() < end && start < *region.end())
    }

    /// Regions on `chrom` whose decoded strand is identity-equal to `strand`.
    pub fn on_strand<'a>(
        &'a self,
        chrom: &Symbol,
        strand: &'a Symbol,
    ) -> impl Iterator<Item = &'a Region> {
        self.chrom_regions(chrom)
            .iter()
            .filter(move |region| region.optional().strand() == Some(strand))
    }
}
