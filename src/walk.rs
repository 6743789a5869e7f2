//! Bounded-below random-walk price series via rejection sampling.
//!
//! A candidate walk is the inclusive prefix sum of unit steps drawn from
//! {-1, 0, 1}, with step 0 overwritten by an anchor so the series starts
//! high above the floor. Candidates whose minimum dips below the floor are
//! discarded wholesale and redrawn; there is no per-element retry.

use rand::Rng;

use crate::error::Error;

/// A successfully generated walk plus how many candidates it took.
#[derive(Clone, Debug)]
pub struct WalkOutcome {
    pub walk: Vec<i64>,
    /// 1 means the first candidate was accepted.
    pub attempts: u32,
}

/// Draws `n` unit steps uniformly from {-1, 0, 1}.
pub fn sample_steps(rng: &mut impl Rng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(-1i64..=1)).collect()
}

/// Overwrites step 0 with `anchor`, then takes the inclusive prefix sum.
/// The overwrite happens before summation, so element 0 of the result is
/// exactly `anchor`.
pub fn cumulative_walk(mut steps: Vec<i64>, anchor: i64) -> Vec<i64> {
    if let Some(first) = steps.first_mut() {
        *first = anchor;
    }
    let mut sum = 0i64;
    for value in steps.iter_mut() {
        sum += *value;
        *value = sum;
    }
    steps
}

/// Generates a walk of length `n` whose minimum is ≥ `floor` and whose first
/// value is exactly `anchor`.
///
/// Acceptance is probabilistic: each candidate is redrawn in full when its
/// minimum falls below `floor`. When `floor` is close to or above `anchor`
/// almost every candidate is rejected, so the loop is capped at
/// `max_attempts` and fails with [`Error::GenerationExhausted`] rather than
/// spinning forever.
pub fn generate_walk(
    rng: &mut impl Rng,
    n: usize,
    floor: i64,
    anchor: i64,
    max_attempts: u32,
) -> Result<WalkOutcome, Error> {
    if n == 0 {
        return Err(Error::InvalidConfiguration("walk length must be > 0".into()));
    }
    for attempt in 1..=max_attempts {
        let candidate = cumulative_walk(sample_steps(rng, n), anchor);
        let min = candidate.iter().copied().min().unwrap_or(anchor);
        if min >= floor {
            return Ok(WalkOutcome {
                walk: candidate,
                attempts: attempt,
            });
        }
        log::debug!(
            "walk candidate {} rejected: min {} < floor {}",
            attempt,
            min,
            floor
        );
    }
    Err(Error::GenerationExhausted {
        attempts: max_attempts,
    })
}
