use crate::id::Id;

/// Failures surfaced by the balancing engine.
///
/// The first three variants mean the caller handed over malformed data and
/// the whole batch is rejected with no partial output. `MissingDistractors`
/// is different: it cannot occur while the input invariants hold, so seeing
/// it means a bug, and it carries the record id instead of being skipped so
/// a bad rearrangement never silently corrupts the distribution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("option slot count must be at least 1")]
    NoOptionSlots,
    #[error("question {id} has an empty options list")]
    EmptyOptions { id: Id },
    #[error("question {id}: correct index {correct} out of range for {len} options")]
    CorrectOutOfRange { id: Id, correct: usize, len: usize },
    #[error("question {id}: {missing} option slots left unfilled after rearranging")]
    MissingDistractors { id: Id, missing: usize },
}
