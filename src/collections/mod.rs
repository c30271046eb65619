/*!
Collection implementations.

Four independent, self-contained structures, no inter-dependencies:
- `ArrayStack` for contiguous-buffer LIFO access
- `LinkedStack` for node-chain LIFO access
- `LinkedQueue` for node-chain FIFO access
- `LinkedDequeue` for double-ended access

A consumer picks whichever structure fits its access pattern; no data
flows between them.
*/

pub mod array_stack;
pub mod linked_dequeue;
pub mod linked_queue;
pub mod linked_stack;

// Re-export the structure types directly
pub use array_stack::ArrayStack;
pub use linked_dequeue::LinkedDequeue;
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
