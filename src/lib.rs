/*!
# Linear Collections

Fundamental linear data structures over a fixed element type:

- `ArrayStack` — growable contiguous-buffer stack (LIFO)
- `LinkedStack` — singly-linked-node stack (LIFO)
- `LinkedQueue` — singly-linked-node queue (FIFO) tracking both ends
- `LinkedDequeue` — doubly-linked double-ended queue

Each structure exclusively owns its storage (one contiguous buffer, or a
node chain owned forward from its entry pointer) and exposes
push/pop/peek/clear/size/empty operations plus a diagnostic rendering via
`Display`. The structures are single-threaded by design: no internal
synchronization is provided, and concurrent use requires external mutual
exclusion around the whole instance.
*/

// Shared element type, constants and errors
pub mod constants;
pub mod element;
pub mod error;

// Collection implementations
pub mod collections;

// Re-export commonly used types for convenience
pub use collections::{ArrayStack, LinkedDequeue, LinkedQueue, LinkedStack};
pub use constants::CAPACITY_GROWTH_INCREMENT;
pub use element::Element;
pub use error::{Error, Result};
