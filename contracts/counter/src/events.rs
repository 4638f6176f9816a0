// NEP-297 event logs for counter state changes.

use near_sdk::env;
use serde::Serialize;
use serde_json::json;

pub const EVENT_STANDARD: &str = "counter";
pub const EVENT_VERSION: &str = "1.0.0";
const EVENT_PREFIX: &str = "EVENT_JSON:";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub struct CountChange {
    pub old_count: u64,
    pub new_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Increment(CountChange),
    Decrement(CountChange),
}

impl CounterEvent {
    pub fn increment(old_count: u64, new_count: u64) -> Self {
        Self::Increment(CountChange { old_count, new_count })
    }

    pub fn decrement(old_count: u64, new_count: u64) -> Self {
        Self::Decrement(CountChange { old_count, new_count })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment(_) => "counter_increment",
            Self::Decrement(_) => "counter_decrement",
        }
    }

    fn change(&self) -> &CountChange {
        match self {
            Self::Increment(change) | Self::Decrement(change) => change,
        }
    }

    /// Full log line, `EVENT_JSON:` prefix included.
    pub fn to_log_string(&self) -> String {
        let body = json!({
            "standard": EVENT_STANDARD,
            "version": EVENT_VERSION,
            "event": self.name(),
            "data": [self.change()],
        });
        format!("{}{}", EVENT_PREFIX, body)
    }

    pub fn emit(&self) {
        env::log_str(&self.to_log_string());
    }
}
