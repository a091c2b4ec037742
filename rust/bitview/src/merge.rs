//! Scan algorithms shared by the composite views.
//!
//! Both functions address operands by position through a `probe(operand, from)`
//! callback that answers "first qualifying position `>= from`" for one operand, where
//! "qualifying" is either set or clear depending on the caller. Probes must never
//! return a position below `from` nor at or beyond `max_size`.

/// Convergence (pointer-catchup) merge: finds the smallest position `>= start` at
/// which every operand qualifies.
///
/// Each round probes every operand at the current candidate. A `None` from any operand
/// means the consensus can never be reached from here on. Otherwise the largest answer
/// becomes the next candidate, and the scan stops once all answers agree.
///
/// The candidate strictly increases on every round that does not converge and is
/// bounded by `max_size`, so the loop terminates. Worst case is O(max_size) rounds of
/// `operand_count` probes each; sparse or clustered operands converge much sooner.
pub(crate) fn converge<P>(operand_count: usize, start: u32, max_size: u32, probe: P) -> Option<u32>
where
    P: Fn(usize, u32) -> Option<u32>,
{
    debug_assert!(operand_count > 0);
    let mut candidate = start;
    let mut rounds = 0u32;
    while candidate < max_size {
        rounds += 1;
        let mut lowest = u32::MAX;
        let mut highest = candidate;
        for operand in 0..operand_count {
            let pos = probe(operand, candidate)?;
            debug_assert!(pos >= candidate);
            lowest = lowest.min(pos);
            highest = highest.max(pos);
        }
        if lowest == highest {
            log::trace!("converged at {highest} after {rounds} rounds (start {start})");
            return Some(highest);
        }
        candidate = highest;
    }
    None
}

/// De Morgan dual pass: finds the smallest position `>= start` at which any operand
/// qualifies, as the minimum of the per-operand answers.
pub(crate) fn first_of_any<P>(
    operand_count: usize,
    start: u32,
    max_size: u32,
    probe: P,
) -> Option<u32>
where
    P: Fn(usize, u32) -> Option<u32>,
{
    if start >= max_size {
        return None;
    }
    (0..operand_count)
        .filter_map(|operand| probe(operand, start))
        .min()
}

#[cfg(test)]
mod tests {
    use super::{converge, first_of_any};

    fn next_in(positions: &[u32], from: u32) -> Option<u32> {
        positions.iter().copied().find(|&p| p >= from)
    }

    #[test]
    fn test_converge_finds_common_position() {
        let lists: [&[u32]; 3] = [&[1, 4, 9, 12, 20], &[2, 9, 12, 15, 20], &[0, 3, 12, 20]];
        let probe = |i: usize, from: u32| next_in(lists[i], from);
        assert_eq!(converge(3, 0, 32, probe), Some(12));
        assert_eq!(converge(3, 13, 32, probe), Some(20));
        assert_eq!(converge(3, 21, 32, probe), None);
        assert_eq!(converge(3, 32, 32, probe), None);
    }

    #[test]
    fn test_converge_short_circuits_on_exhausted_operand() {
        let lists: [&[u32]; 2] = [&[1, 2, 3], &[]];
        let calls = std::cell::Cell::new(0);
        let probe = |i: usize, from: u32| {
            calls.set(calls.get() + 1);
            next_in(lists[i], from)
        };
        assert_eq!(converge(2, 0, 10, probe), None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_converge_single_operand_is_identity() {
        let list: &[u32] = &[5, 7];
        for start in 0..10 {
            assert_eq!(
                converge(1, start, 10, |_, from| next_in(list, from)),
                next_in(list, start)
            );
        }
    }

    #[test]
    fn test_first_of_any_ignores_exhausted_operands() {
        let lists: [&[u32]; 3] = [&[], &[8], &[3, 9]];
        let probe = |i: usize, from: u32| next_in(lists[i], from);
        assert_eq!(first_of_any(3, 0, 10, probe), Some(3));
        assert_eq!(first_of_any(3, 4, 10, probe), Some(8));
        assert_eq!(first_of_any(3, 9, 10, probe), Some(9));
        assert_eq!(first_of_any(3, 10, 10, probe), None);
        assert_eq!(first_of_any(1, 0, 10, |_, _| None), None);
    }
}
