use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::BalanceError;

/// Produces one target slot per question such that every slot in `0..k`
/// appears either `floor(n/k)` or `ceil(n/k)` times.
///
/// The returned order is shuffled with the supplied RNG, so which question
/// ends up with which slot is not predictable from input order. Passing a
/// seeded RNG reproduces the same plan.
pub fn plan_targets<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    k: usize,
) -> Result<Vec<usize>, BalanceError> {
    if k == 0 {
        return Err(BalanceError::NoOptionSlots);
    }

    // ceil(n/k) full passes over 0..k, truncated to n. Truncation drops at
    // most k-1 entries, each slot losing at most one occurrence, which is
    // exactly the +/-1 count property.
    let passes = n.div_ceil(k);
    let mut targets: Vec<usize> = Vec::with_capacity(passes * k);
    for _ in 0..passes {
        targets.extend(0..k);
    }
    targets.truncate(n);
    targets.shuffle(rng);

    Ok(targets)
}
