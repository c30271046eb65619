/*!
Doubly-linked double-ended queue.

Nodes live on the heap and are reached through the `front`/`back`
boundary pointers; `next`/`prev` links connect the chain in both
directions. Ownership runs forward only: a node is boxed back exactly
once, either by a removal at an end or by the single forward pass in
`clear`. The `prev` links are navigational and are never used to release
a node, which rules out double frees during teardown.
*/

use std::fmt;
use std::ptr::NonNull;

use crate::element::Element;
use crate::error::{Error, Result};

/// A heap node linked in both directions
struct Node {
    data: Element,
    next: Option<NonNull<Node>>,
    prev: Option<NonNull<Node>>,
}

impl Node {
    /// Allocates the node and leaks it into a raw boundary pointer; the
    /// structure re-owns it later via `Box::from_raw`.
    fn into_link(data: Element, prev: Option<NonNull<Node>>, next: Option<NonNull<Node>>) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node { data, next, prev })))
    }
}

/// Doubly-linked double-ended queue.
///
/// Both boundaries are tracked directly, so pushes and pops at either end
/// are O(1) with no traversal.
pub struct LinkedDequeue {
    /// Oldest node (forward end of the chain)
    front: Option<NonNull<Node>>,
    /// Newest node (backward end of the chain)
    back: Option<NonNull<Node>>,
    /// Chain length
    size: usize,
}

impl LinkedDequeue {
    /// Creates an empty dequeue.
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            size: 0,
        }
    }

    /// Appends `e` at the back. O(1).
    pub fn enqueue(&mut self, e: Element) {
        let node = Node::into_link(e, self.back, None);
        match self.back {
            // SAFETY: the old back is a live node of this chain.
            Some(back) => unsafe { (*back.as_ptr()).next = Some(node) },
            None => self.front = Some(node),
        }
        self.back = Some(node);
        self.size += 1;
    }

    /// Prepends `e` at the front. O(1).
    pub fn enqueue_front(&mut self, e: Element) {
        let node = Node::into_link(e, None, self.front);
        match self.front {
            // SAFETY: the old front is a live node of this chain.
            Some(front) => unsafe { (*front.as_ptr()).prev = Some(node) },
            None => self.back = Some(node),
        }
        self.front = Some(node);
        self.size += 1;
    }

    /// Removes the front node and returns its value. O(1).
    ///
    /// Fails with `Error::EmptyQueue` on an empty dequeue. The new
    /// front's dangling `prev` link is cleared; removing the last element
    /// clears `back` as well.
    pub fn dequeue(&mut self) -> Result<Element> {
        let front = self.front.ok_or(Error::EmptyQueue)?;
        // SAFETY: front came from `Box::leak` at insertion and is removed
        // from the chain here, so it is boxed back exactly once.
        let node = unsafe { Box::from_raw(front.as_ptr()) };
        self.front = node.next;
        match self.front {
            // SAFETY: the successor is a live node of this chain.
            Some(next) => unsafe { (*next.as_ptr()).prev = None },
            None => self.back = None,
        }
        self.size -= 1;
        Ok(node.data)
    }

    /// Removes the back node and returns its value, symmetric to
    /// `dequeue`. O(1).
    pub fn dequeue_back(&mut self) -> Result<Element> {
        let back = self.back.ok_or(Error::EmptyQueue)?;
        // SAFETY: back came from `Box::leak` at insertion and is removed
        // from the chain here, so it is boxed back exactly once.
        let node = unsafe { Box::from_raw(back.as_ptr()) };
        self.back = node.prev;
        match self.back {
            // SAFETY: the predecessor is a live node of this chain.
            Some(prev) => unsafe { (*prev.as_ptr()).next = None },
            None => self.front = None,
        }
        self.size -= 1;
        Ok(node.data)
    }

    /// Returns the value at the front, or `None` when empty.
    pub fn front(&self) -> Option<Element> {
        // SAFETY: boundary pointers only ever hold live nodes.
        self.front.map(|node| unsafe { node.as_ref().data })
    }

    /// Returns the value at the back, or `None` when empty.
    pub fn back(&self) -> Option<Element> {
        // SAFETY: boundary pointers only ever hold live nodes.
        self.back.map(|node| unsafe { node.as_ref().data })
    }

    /// Releases the entire chain in a single forward pass and resets both
    /// boundaries. `prev` links are never followed here.
    pub fn clear(&mut self) {
        let mut current = self.front.take();
        while let Some(node) = current {
            // SAFETY: each node is reached once via the forward links and
            // boxed back exactly here.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
        self.back = None;
        self.size = 0;
    }

    /// Current element count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the dequeue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Default for LinkedDequeue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedDequeue {
    fn drop(&mut self) {
        self.clear();
    }
}

// The node pointers never escape the structure and all mutation goes
// through `&mut self`, so exclusive ownership carries across threads.
unsafe impl Send for LinkedDequeue {}
unsafe impl Sync for LinkedDequeue {}

impl fmt::Display for LinkedDequeue {
    /// Renders `size: <N>` followed by one line per element from front to
    /// back; the front line is prefixed `[FRONT] `, the back line
    /// `[BACK] `. A single element carries both prefixes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}", self.size)?;
        let mut current = self.front;
        let mut at_front = true;
        while let Some(ptr) = current {
            // SAFETY: forward traversal only visits live chain nodes.
            let node = unsafe { ptr.as_ref() };
            if at_front {
                write!(f, "[FRONT] ")?;
                at_front = false;
            }
            if node.next.is_none() {
                write!(f, "[BACK] ")?;
            }
            writeln!(f, "{}", node.data.name())?;
            current = node.next;
        }
        Ok(())
    }
}
