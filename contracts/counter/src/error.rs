use near_sdk::FunctionError;
use thiserror::Error;

/// Failures surfaced by counter methods.
///
/// On chain the `#[handle_result]` export panics with the display text, so the
/// receipt fails and no state is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, FunctionError)]
pub enum CounterError {
    #[error("Counter underflow: cannot decrement below zero")]
    Underflow,
}
