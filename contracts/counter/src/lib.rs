// Non-negative counter contract.
// Holds a single u64 created at zero on init.
// Anyone may increment; decrement is rejected at zero with no state change.
// Every successful mutation emits a NEP-297 event.

mod error;
mod events;

pub use error::CounterError;
pub use events::{CountChange, CounterEvent, EVENT_STANDARD, EVENT_VERSION};

use near_sdk::{near, PanicOnDefault};

/// On-chain state for the counter contract.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Counter {
    count: u64,
}

#[near]
impl Counter {
    #[init]
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Adds one and returns the new value.
    pub fn increment(&mut self) -> u64 {
        let old_count = self.count;
        self.count += 1;
        CounterEvent::increment(old_count, self.count).emit();
        self.count
    }

    /// Subtracts one and returns the new value. Fails with `Underflow` at zero.
    #[handle_result]
    pub fn decrement(&mut self) -> Result<u64, CounterError> {
        let old_count = self.count;
        let new_count = old_count.checked_sub(1).ok_or(CounterError::Underflow)?;
        self.count = new_count;
        CounterEvent::decrement(old_count, new_count).emit();
        Ok(new_count)
    }
}
