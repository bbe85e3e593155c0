//! Trivia question constraints and quiz "next question" selection.

use std::collections::HashSet;

use rand::Rng;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest allowed question difficulty.
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest allowed question difficulty.
pub const MAX_DIFFICULTY: i32 = 5;

/// Quiz category id meaning "draw from every category".
pub const ALL_CATEGORIES: DbId = 0;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a difficulty score is within the allowed range.
pub fn validate_difficulty(difficulty: i32) -> Result<(), String> {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        Ok(())
    } else {
        Err(format!(
            "Difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {difficulty}"
        ))
    }
}

// ---------------------------------------------------------------------------
// Quiz selection
// ---------------------------------------------------------------------------

/// Pick the next quiz question uniformly at random.
///
/// `candidates` are the question ids in the chosen category and `previous`
/// the ids the caller has already seen. Returns `None` once the candidate
/// set is exhausted. The returned id is never a member of `previous`.
pub fn pick_next_question(candidates: &[DbId], previous: &[DbId]) -> Option<DbId> {
    let seen: HashSet<DbId> = previous.iter().copied().collect();
    let remaining: Vec<DbId> = candidates
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let idx = rand::rng().random_range(0..remaining.len());
    Some(remaining[idx])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
