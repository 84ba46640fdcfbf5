mod high_score;
mod key_value_store;

pub use high_score::HighScore;
pub use key_value_store::{KeyValueStore, MemoryKeyValueStore, YamlKeyValueStore};
