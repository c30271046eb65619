/*!
Singly-linked queue tracking both ends.

The chain is owned forward from `front`; `back` is a non-owning raw cursor
onto the last node so that enqueue stays O(1) without traversal. The
cursor is null exactly when the queue is empty.
*/

use std::fmt;
use std::ptr;

use crate::element::Element;
use crate::error::{Error, Result};

/// A node owning its successor
struct Node {
    data: Element,
    next: Option<Box<Node>>,
}

/// Singly-linked-node queue (FIFO).
///
/// `front` is the oldest enqueued node, `back` the newest; with a single
/// element both refer to the same node.
pub struct LinkedQueue {
    /// Oldest node; owns the whole chain
    front: Option<Box<Node>>,
    /// Non-owning cursor to the newest node; null iff the queue is empty
    back: *mut Node,
    /// Chain length
    size: usize,
}

impl LinkedQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            front: None,
            back: ptr::null_mut(),
            size: 0,
        }
    }

    /// Appends `e` at the back of the queue. O(1).
    pub fn enqueue(&mut self, e: Element) {
        let mut node = Box::new(Node { data: e, next: None });
        let raw: *mut Node = &mut *node;
        if self.back.is_null() {
            self.front = Some(node);
        } else {
            // SAFETY: a non-null back always points at the last node of
            // the chain owned by `front`.
            unsafe { (*self.back).next = Some(node) };
        }
        self.back = raw;
        self.size += 1;
    }

    /// Removes the front node and returns its value. O(1).
    ///
    /// Fails with `Error::EmptyQueue` on an empty queue. When the last
    /// element leaves, the back cursor is cleared as well.
    pub fn dequeue(&mut self) -> Result<Element> {
        match self.front.take() {
            None => Err(Error::EmptyQueue),
            Some(node) => {
                let Node { data, next } = *node;
                self.front = next;
                if self.front.is_none() {
                    self.back = ptr::null_mut();
                }
                self.size -= 1;
                Ok(data)
            }
        }
    }

    /// Returns the value at the front, or `None` when empty.
    pub fn front(&self) -> Option<Element> {
        self.front.as_ref().map(|node| node.data)
    }

    /// Returns the value at the back, or `None` when empty.
    pub fn back(&self) -> Option<Element> {
        if self.back.is_null() {
            None
        } else {
            // SAFETY: a non-null back always points into the live chain.
            Some(unsafe { (*self.back).data })
        }
    }

    /// Releases the entire chain in one forward pass and resets both
    /// boundaries.
    pub fn clear(&mut self) {
        let mut current = self.front.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.back = ptr::null_mut();
        self.size = 0;
    }

    /// Current element count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Default for LinkedQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

// The raw back cursor never escapes the structure and all mutation goes
// through `&mut self`, so exclusive ownership carries across threads.
unsafe impl Send for LinkedQueue {}
unsafe impl Sync for LinkedQueue {}

impl fmt::Display for LinkedQueue {
    /// Renders `size: <N>` followed by one line per element from front to
    /// back; the front line is prefixed `[FRONT] `, the back line
    /// `[BACK] `. A single element carries both prefixes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}", self.size)?;
        let mut current = self.front.as_deref();
        let mut at_front = true;
        while let Some(node) = current {
            if at_front {
                write!(f, "[FRONT] ")?;
                at_front = false;
            }
            if node.next.is_none() {
                write!(f, "[BACK] ")?;
            }
            writeln!(f, "{}", node.data.name())?;
            current = node.next.as_deref();
        }
        Ok(())
    }
}
