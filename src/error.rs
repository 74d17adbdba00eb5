/*
 * Error Module
 *
 * This module defines the error type surfaced by the simulation core.
 * There are only two failure modes: a configuration rejected at
 * construction time, and an agent index outside the flock. Stepping
 * itself cannot fail once construction has succeeded.
 */

use thiserror::Error;

// Errors returned by the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlockError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("agent index {index} out of range for a flock of {count}")]
    IndexOutOfRange { index: usize, count: usize },
}
