use derive_getters::Getters;

use super::fields::OptionalFieldError;
use crate::symbols::{Intern, Symbol};

/// The two canonical strand sentinels, interned once from a caller-supplied interner.
///
/// Consumers filter regions by identity comparison against [`forward`](Self::forward)
/// and [`reverse`](Self::reverse), so the pair used for decoding and the pair used
/// for querying must come from the same interner.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StrandSymbols {
    forward: Symbol,
    reverse: Symbol,
}

impl StrandSymbols {
    pub fn new(interner: &mut impl Intern) -> Self {
        Self {
            forward: interner.intern("+"),
            reverse: interner.intern("-"),
        }
    }

    /// Resolve a raw strand column to the matching sentinel.
    pub fn resolve(&self, value: &str) -> Result<Symbol, OptionalFieldError> {
        match value {
            "+" => Ok(self.forward.clone()),
            "-" => Ok(self.reverse.clone()),
            _ => Err(OptionalFieldError::Strand {
                value: value.to_owned(),
            }),
        }
    }
}
