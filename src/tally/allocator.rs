//! Identifier allocation for new records.
//!
//! Expenses use small dense integers: the next id is always the smallest
//! positive integer not currently in use, so ids freed by deletion are handed
//! out again. Tasks use short random hex tokens which are never reused on
//! purpose; a freshly drawn token is checked against the live collection and
//! redrawn a bounded number of times.

use crate::error::{Result, TallyError};
use rand::RngCore;

/// Bytes of randomness per task token (rendered as twice as many hex chars).
pub const TOKEN_BYTES: usize = 4;

/// Redraws before giving up on finding an unused token.
pub const MAX_TOKEN_ATTEMPTS: usize = 8;

/// Smallest positive integer not present in `ids`.
pub fn next_expense_id<I>(ids: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut sorted: Vec<u32> = ids.into_iter().filter(|&id| id > 0).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut expected = 1;
    for id in sorted {
        if id != expected {
            break;
        }
        expected += 1;
    }
    expected
}

/// Draws a random lowercase hex token from the thread-local CSPRNG.
pub fn random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Allocates a task id that `is_taken` does not already claim.
pub fn next_task_id<F>(is_taken: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    allocate_token(is_taken, random_token)
}

fn allocate_token<F, D>(is_taken: F, mut draw: D) -> Result<String>
where
    F: Fn(&str) -> bool,
    D: FnMut() -> String,
{
    for _ in 0..MAX_TOKEN_ATTEMPTS {
        let candidate = draw();
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    Err(TallyError::IdSpaceExhausted(MAX_TOKEN_ATTEMPTS))
}
