//! Logical OR of bit-fields.

use bitview_common::Result;

use crate::{
    BitField, SharedBitField,
    and_view::AndView,
    boolean_function::{BooleanFunction, count_set_bits},
    config::ViewConfig,
    merge,
};

/// A position is set iff it is set in at least one operand.
///
/// The dual of [`AndView`]:
///
/// - `next_set_bit` takes the smallest `next_set_bit` over the operands in one pass.
/// - `next_clear_bit` needs every operand clear at the same position, so it runs the
///   convergence merge over the operands' `next_clear_bit`.
///
/// Operands may overlap, so the default cardinality tests every position rather than
/// summing operand cardinalities.
#[derive(Clone, Debug)]
pub struct OrView {
    function: BooleanFunction,
}

impl OrView {
    /// OR of `first` and every operand in `rest`.
    ///
    /// Fails with a domain-mismatch error if the operands disagree on `max_size()`.
    pub fn new(
        first: SharedBitField,
        rest: impl IntoIterator<Item = SharedBitField>,
    ) -> Result<OrView> {
        Ok(Self::from_function(BooleanFunction::new(first, rest)?))
    }

    pub fn from_function(function: BooleanFunction) -> OrView {
        log::debug!(
            "or view over {} operands, max size {}",
            function.operand_count(),
            function.max_size()
        );
        OrView { function }
    }

    pub(crate) fn pair_unchecked(a: SharedBitField, b: SharedBitField) -> OrView {
        OrView {
            function: BooleanFunction::pair_unchecked(a, b),
        }
    }

    pub fn with_config(self, config: ViewConfig) -> Result<OrView> {
        Ok(OrView {
            function: self.function.with_config(config)?,
        })
    }

    pub fn function(&self) -> &BooleanFunction {
        &self.function
    }
}

impl BitField for OrView {
    #[inline]
    fn max_size(&self) -> u32 {
        self.function.max_size()
    }

    fn contains(&self, index: u32) -> bool {
        self.function
            .operands()
            .iter()
            .any(|operand| operand.contains(index))
    }

    fn next_set_bit(&self, start: u32) -> Option<u32> {
        let function = &self.function;
        merge::first_of_any(
            function.operand_count(),
            start,
            function.max_size(),
            |operand, from| function.operand(operand).next_set_bit(from),
        )
    }

    fn next_clear_bit(&self, start: u32) -> Option<u32> {
        let function = &self.function;
        merge::converge(
            function.operand_count(),
            start,
            function.max_size(),
            |operand, candidate| function.operand(operand).next_clear_bit(candidate),
        )
    }

    fn cardinality(&self) -> u32 {
        self.function.cardinality_of(self, |a, b| {
            count_set_bits(&AndView::pair_unchecked(a.clone(), b.clone()))
        })
    }
}
