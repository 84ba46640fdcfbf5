use crate::defaults::HIGH_SCORE_KEY;
use crate::{log, warn};

use super::KeyValueStore;

/// Best score across sessions, mirrored to a key-value store as a decimal string.
/// The value only ever grows.
pub struct HighScore<S: KeyValueStore> {
    store: S,
    key: String,
    best: u32,
}

impl<S: KeyValueStore> HighScore<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, HIGH_SCORE_KEY)
    }

    /// Missing, unreadable or unparseable data all start from 0.
    pub fn load_with_key(store: S, key: &str) -> Self {
        let best = match store.get(key) {
            Ok(Some(raw)) => parse_high_score(&raw).unwrap_or_else(|| {
                warn!("Ignoring malformed high score {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!("Failed to read high score: {}", e);
                0
            }
        };

        Self {
            store,
            key: key.to_string(),
            best,
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Raises the best score to `score` if it is higher and persists it.
    /// Returns whether a new record was set.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }

        self.best = score;
        match self.store.set(&self.key, &score.to_string()) {
            Ok(()) => log!("New high score: {}", score),
            Err(e) => warn!("Failed to persist high score {}: {}", score, e),
        }
        true
    }
}

fn parse_high_score(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
