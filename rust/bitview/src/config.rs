//! Options for composite views.

use bitview_common::{Result, verify_arg};

/// How a composite view counts its set positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardinalityStrategy {
    /// Tests every position of the domain. O(max_size) membership tests, independent
    /// of how the operands are stored.
    #[default]
    Exhaustive,
    /// Walks the set positions with `next_set_bit`. Cheaper than `Exhaustive` for
    /// sparse results.
    SetBitScan,
    /// Exactly two operands only: derives the count from the operand cardinalities and
    /// the count of the dual view, `|A ∧ B| + |A ∨ B| = |A| + |B|`.
    InclusionExclusion,
}

/// Configuration for composite views.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub cardinality: CardinalityStrategy,
}

impl ViewConfig {
    pub fn with_cardinality(mut self, cardinality: CardinalityStrategy) -> ViewConfig {
        self.cardinality = cardinality;
        self
    }

    /// Validates the configuration for a composite with `operand_count` operands.
    pub fn validate(&self, operand_count: usize) -> Result<()> {
        verify_arg!(operand_count, operand_count > 0);
        if self.cardinality == CardinalityStrategy::InclusionExclusion {
            verify_arg!(cardinality, operand_count == 2);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CardinalityStrategy, ViewConfig};

    #[test]
    fn test_default_is_exhaustive() {
        let config = ViewConfig::default();
        assert_eq!(config.cardinality, CardinalityStrategy::Exhaustive);
        assert!(config.validate(1).is_ok());
        assert!(config.validate(0).is_err());
    }

    #[test]
    fn test_inclusion_exclusion_requires_two_operands() {
        let config = ViewConfig::default()
            .with_cardinality(CardinalityStrategy::InclusionExclusion);
        assert!(config.validate(2).is_ok());
        assert!(config.validate(1).is_err());
        assert!(config.validate(3).is_err());
    }
}
