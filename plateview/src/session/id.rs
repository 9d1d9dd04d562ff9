//! Layer identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter for layer ids.
static LAYER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identifier of an image layer, `layer-{n}`.
///
/// Unique within the process, so ids from different sessions never collide.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Next unused id.
    pub fn auto() -> Self {
        let counter = LAYER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("layer-{}", counter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({})", self.0)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_ids_are_unique() {
        let a = LayerId::auto();
        let b = LayerId::auto();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("layer-"));
    }
}
