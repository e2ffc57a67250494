use derive_getters::{Dissolve, Getters};

use super::fields::{OptionalFieldError, OptionalFields};
use super::strand::StrandSymbols;
use crate::symbols::Symbol;

/// One validated BED interval with its decoded optional columns.
///
/// Coordinates are stored as given: no ordering between `start` and `end` is
/// enforced and negative values are accepted, matching the permissive stance of
/// the format for these columns. Constructed once and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct Region {
    chrom: Symbol,
    start: i64,
    end: i64,
    optional: OptionalFields,
}

impl Region {
    /// Build a region from raw optional columns. Fails if and only if the decoder
    /// fails, in which case its error is propagated untouched.
    pub fn new<S: AsRef<str>>(
        chrom: Symbol,
        start: i64,
        end: i64,
        columns: &[S],
        strands: &StrandSymbols,
    ) -> Result<Self, OptionalFieldError> {
        let optional = OptionalFields::decode(columns, strands)?;
        Ok(Self {
            chrom,
            start,
            end,
            optional,
        })
    }
}
