//! Configuration for composing boolean results.
//!
//! [`ComposeConfig`] controls how selected faces are welded into the output
//! mesh. Neither option changes which faces are selected.
//!
//! # Example
//!
//! ```
//! use polycsg::{ComposeConfig, WeldIndex};
//!
//! let config = ComposeConfig::default().with_reverse_inverted_winding(true);
//! assert_eq!(config.weld_index, WeldIndex::Hashed);
//! ```

/// Lookup structure used to find previously welded vertices.
///
/// Both variants produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeldIndex {
    /// Hash map keyed by the exact vertex bit pattern.
    #[default]
    Hashed,

    /// Equality scan over every vertex welded so far.
    /// Quadratic, but allocation-free beyond the output buffers.
    LinearScan,
}

/// Configuration for result composition.
#[derive(Debug, Clone, Default)]
pub struct ComposeConfig {
    /// How welded vertices are looked up.
    pub weld_index: WeldIndex,

    /// Emit operand-2 faces selected under an inverting policy (difference)
    /// with reversed winding `(v1, v3, v2)`.
    pub reverse_inverted_winding: bool,
}

impl ComposeConfig {
    /// Configuration that welds with a linear equality scan.
    #[must_use]
    pub fn linear_scan() -> Self {
        Self {
            weld_index: WeldIndex::LinearScan,
            ..Self::default()
        }
    }

    /// Sets the weld lookup structure.
    #[must_use]
    pub fn with_weld_index(mut self, weld_index: WeldIndex) -> Self {
        self.weld_index = weld_index;
        self
    }

    /// Sets whether inverted operand faces have their winding reversed.
    #[must_use]
    pub fn with_reverse_inverted_winding(mut self, reverse: bool) -> Self {
        self.reverse_inverted_winding = reverse;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hashed_without_reversal() {
        let config = ComposeConfig::default();
        assert_eq!(config.weld_index, WeldIndex::Hashed);
        assert!(!config.reverse_inverted_winding);
    }

    #[test]
    fn builders_override_fields() {
        let config = ComposeConfig::linear_scan().with_reverse_inverted_winding(true);
        assert_eq!(config.weld_index, WeldIndex::LinearScan);
        assert!(config.reverse_inverted_winding);

        let config = config.with_weld_index(WeldIndex::Hashed);
        assert_eq!(config.weld_index, WeldIndex::Hashed);
    }
}
