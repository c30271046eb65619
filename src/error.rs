/*!
Error handling for the collections.

Two error kinds exist: an invalid construction argument, and removal from
an empty structure. Both are synchronous and surfaced directly to the
caller; the failing call leaves the structure unchanged.
*/

use thiserror::Error;

/// Result type for the collections
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the collections
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Construction with a capacity of zero
    #[error("initial capacity must be greater than zero")]
    InvalidCapacity,

    /// Pop from a stack holding no elements
    #[error("cannot pop out from empty stack")]
    EmptyStack,

    /// Dequeue from a queue holding no elements
    #[error("cannot dequeue from empty queue")]
    EmptyQueue,
}
