//! Operand list shared by the composite views.
//!
//! A [`BooleanFunction`] owns a non-empty, fixed list of operand bit-fields that all
//! cover the same domain. The domain is checked once, when the function is built;
//! operands are trusted not to change their domain size afterwards.

use bitview_common::{Error, Result, verify_arg};

use crate::{
    BitField, BitFieldExt, SharedBitField,
    config::{CardinalityStrategy, ViewConfig},
};

/// Non-empty list of operands over a common domain, plus the view configuration.
#[derive(Clone)]
pub struct BooleanFunction {
    operands: Box<[SharedBitField]>,
    max_size: u32,
    config: ViewConfig,
}

impl BooleanFunction {
    /// Builds the operand list `first, rest...`.
    ///
    /// Fails with [`ErrorKind::DomainMismatch`](crate::ErrorKind::DomainMismatch) naming
    /// the first operand whose `max_size()` differs from `first.max_size()`.
    pub fn new(
        first: SharedBitField,
        rest: impl IntoIterator<Item = SharedBitField>,
    ) -> Result<BooleanFunction> {
        let operands = std::iter::once(first).chain(rest).collect::<Vec<_>>();
        Self::from_operands(operands)
    }

    /// Builds the operand list from a vector, which must not be empty.
    pub fn from_operands(operands: Vec<SharedBitField>) -> Result<BooleanFunction> {
        verify_arg!(operands, !operands.is_empty());
        let max_size = operands[0].max_size();
        if let Some((position, operand)) = operands
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, operand)| operand.max_size() != max_size)
        {
            log::debug!(
                "rejecting operand {position}: max size {} differs from {max_size}",
                operand.max_size()
            );
            return Err(Error::domain_mismatch(
                position,
                max_size,
                operand.max_size(),
            ));
        }
        Ok(BooleanFunction {
            operands: operands.into_boxed_slice(),
            max_size,
            config: ViewConfig::default(),
        })
    }

    /// Two operands already known to share a domain.
    pub(crate) fn pair_unchecked(a: SharedBitField, b: SharedBitField) -> BooleanFunction {
        debug_assert_eq!(a.max_size(), b.max_size());
        let max_size = a.max_size();
        BooleanFunction {
            operands: Box::new([a, b]),
            max_size,
            config: ViewConfig::default(),
        }
    }

    /// Replaces the configuration after validating it against the operand count.
    pub fn with_config(mut self, config: ViewConfig) -> Result<BooleanFunction> {
        config.validate(self.operands.len())?;
        self.config = config;
        Ok(self)
    }

    pub fn operands(&self) -> &[SharedBitField] {
        &self.operands
    }

    #[inline]
    pub fn operand(&self, position: usize) -> &dyn BitField {
        self.operands[position].as_ref()
    }

    #[inline]
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    #[inline]
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Counts the set positions of `view`, a composite over these operands, using the
    /// configured strategy.
    ///
    /// `dual_count` receives the two operands under
    /// [`CardinalityStrategy::InclusionExclusion`] and must return the cardinality of
    /// the dual view over them (OR for an AND view, AND for an OR view).
    pub(crate) fn cardinality_of(
        &self,
        view: &dyn BitField,
        dual_count: impl FnOnce(&SharedBitField, &SharedBitField) -> u32,
    ) -> u32 {
        match self.config.cardinality {
            CardinalityStrategy::Exhaustive => count_exhaustive(view),
            CardinalityStrategy::SetBitScan => count_set_bits(view),
            CardinalityStrategy::InclusionExclusion => match &*self.operands {
                [a, b] => {
                    let total = a.cardinality() as u64 + b.cardinality() as u64;
                    total.saturating_sub(dual_count(a, b) as u64) as u32
                }
                _ => {
                    log::debug!(
                        "inclusion-exclusion needs two operands, got {}",
                        self.operands.len()
                    );
                    count_exhaustive(view)
                }
            },
        }
    }
}

impl std::fmt::Debug for BooleanFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BooleanFunction")
            .field("operands", &self.operands.len())
            .field("max_size", &self.max_size)
            .field("config", &self.config)
            .finish()
    }
}

/// Brute-force cardinality: tests every position in `[0, max_size)`.
pub fn count_exhaustive<F: BitField + ?Sized>(field: &F) -> u32 {
    (0..field.max_size())
        .filter(|&index| field.contains(index))
        .count() as u32
}

/// Cardinality by walking the set positions.
pub fn count_set_bits<F: BitField + ?Sized>(field: &F) -> u32 {
    field.set_bits().count() as u32
}
