//! Logical AND of bit-fields.

use bitview_common::Result;

use crate::{
    BitField, SharedBitField,
    boolean_function::{BooleanFunction, count_set_bits},
    config::ViewConfig,
    merge,
    or_view::OrView,
};

/// A position is set iff it is set in every operand.
///
/// Nothing is materialized: queries are answered from the operands on every call.
///
/// - `next_set_bit` runs a convergence merge: all operands are asked for their next set
///   position from a shared candidate, and the candidate jumps to the largest answer
///   until every operand agrees.
/// - `next_clear_bit` needs just one clear operand, so it takes the smallest
///   `next_clear_bit` over the operands in a single pass.
#[derive(Clone, Debug)]
pub struct AndView {
    function: BooleanFunction,
}

impl AndView {
    /// AND of `first` and every operand in `rest`.
    ///
    /// Fails with a domain-mismatch error if the operands disagree on `max_size()`.
    pub fn new(
        first: SharedBitField,
        rest: impl IntoIterator<Item = SharedBitField>,
    ) -> Result<AndView> {
        Ok(Self::from_function(BooleanFunction::new(first, rest)?))
    }

    pub fn from_function(function: BooleanFunction) -> AndView {
        log::debug!(
            "and view over {} operands, max size {}",
            function.operand_count(),
            function.max_size()
        );
        AndView { function }
    }

    pub(crate) fn pair_unchecked(a: SharedBitField, b: SharedBitField) -> AndView {
        AndView {
            function: BooleanFunction::pair_unchecked(a, b),
        }
    }

    pub fn with_config(self, config: ViewConfig) -> Result<AndView> {
        Ok(AndView {
            function: self.function.with_config(config)?,
        })
    }

    pub fn function(&self) -> &BooleanFunction {
        &self.function
    }
}

impl BitField for AndView {
    #[inline]
    fn max_size(&self) -> u32 {
        self.function.max_size()
    }

    fn contains(&self, index: u32) -> bool {
        self.function
            .operands()
            .iter()
            .all(|operand| operand.contains(index))
    }

    fn next_set_bit(&self, start: u32) -> Option<u32> {
        let function = &self.function;
        merge::converge(
            function.operand_count(),
            start,
            function.max_size(),
            |operand, candidate| function.operand(operand).next_set_bit(candidate),
        )
    }

    fn next_clear_bit(&self, start: u32) -> Option<u32> {
        let function = &self.function;
        merge::first_of_any(
            function.operand_count(),
            start,
            function.max_size(),
            |operand, from| function.operand(operand).next_clear_bit(from),
        )
    }

    fn cardinality(&self) -> u32 {
        self.function.cardinality_of(self, |a, b| {
            count_set_bits(&OrView::pair_unchecked(a.clone(), b.clone()))
        })
    }
}
