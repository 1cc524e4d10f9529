//! Best score persistence
//!
//! The score is stored as plain decimal text under [`BEST_SCORE_KEY`]. Anything
//! unreadable counts as no score at all.

use crate::platform::TextStore;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Parse a stored best score, `None` for anything that isn't a non-negative integer
pub fn parse_best_score(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Read the best score, falling back to 0
pub fn load_best_score(store: &impl TextStore) -> u32 {
    match store.read() {
        Ok(Some(raw)) => match parse_best_score(&raw) {
            Some(best) => {
                log::info!("Loaded best score: {}", best);
                best
            }
            None => {
                log::warn!("Ignoring stored best score {:?}", raw);
                0
            }
        },
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Best score unavailable: {}", e);
            0
        }
    }
}

/// Write the best score. Failures are logged and otherwise ignored.
pub fn save_best_score(store: &mut impl TextStore, best: u32) {
    match store.write(&best.to_string()) {
        Ok(()) => log::info!("Best score saved ({})", best),
        Err(e) => log::warn!("Failed to save best score: {}", e),
    }
}
