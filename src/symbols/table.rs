use std::sync::Arc;

use ahash::AHashSet;

use super::Symbol;

/// Contract for the string-interning service consumed by the BED core.
///
/// Interning is idempotent: equal strings passed to the same implementor must yield
/// identical symbols, suitable for cheap equality and hash comparisons. Symbols from
/// different implementors are never equal, even for equal text.
pub trait Intern {
    fn intern(&mut self, value: &str) -> Symbol;
}

/// Baseline interner backed by a set of deduplicated strings.
///
/// There is deliberately no process-wide table: callers construct one and pass it
/// explicitly wherever interning is needed.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: AHashSet<Arc<str>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Intern for SymbolTable {
    fn intern(&mut self, value: &str) -> Symbol {
        match self.entries.get(value) {
            Some(entry) => Symbol::new(entry.clone()),
            None => {
                let entry: Arc<str> = Arc::from(value);
                self.entries.insert(entry.clone());
                Symbol::new(entry)
            }
        }
    }
}
