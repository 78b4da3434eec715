//! Static evaluation at the search cutoff.

/// Value reported for "no bound yet" on the maximizing side.
pub const NEG_INFINITY: i64 = i64::MIN;

/// Value reported for "no bound yet" on the minimizing side.
pub const POS_INFINITY: i64 = i64::MAX;

/// Maps a state to a scalar utility from agent 0's point of view.
///
/// Any `Fn(&G) -> i64` is an evaluator, so a plain function such as a
/// score lookup can be passed directly.
pub trait Evaluator<G> {
    fn evaluate(&self, state: &G) -> i64;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> i64,
{
    fn evaluate(&self, state: &G) -> i64 {
        self(state)
    }
}
