use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Canonical handle for an interned string, e.g. a chromosome name or a strand marker.
///
/// Equality and hashing compare the underlying allocation, not the text: two symbols
/// are equal if and only if they were produced by the same interner for the same
/// string. Cloning is a reference-count bump and never changes identity.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub(crate) fn new(value: Arc<str>) -> Self {
        Self(value)
    }

    /// The interned text behind this symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as *const u8 as usize).hash(state)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", &*self.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let shared: Arc<str> = Arc::from("chr1");
        let first = Symbol::new(shared.clone());
        let second = Symbol::new(shared);
        assert_eq!(first, second);
        assert_eq!(first, first.clone());

        // Same text, different allocation => different symbols.
        let other = Symbol::new(Arc::from("chr1"));
        assert_ne!(first, other);
        assert_eq!(first.as_str(), other.as_str());
    }

    #[test]
    fn test_display() {
        let symbol = Symbol::new(Arc::from("chrX"));
        assert_eq!(format!("{}", symbol), "chrX");
        assert_eq!(format!("{:?}", symbol), "Symbol(\"chrX\")");
    }
}
