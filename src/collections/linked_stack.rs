/*!
Singly-linked stack.

Each node owns its successor, so the whole chain is owned from the `top`
pointer forward. All mutating operations are O(1); teardown walks the
chain iteratively so deep stacks cannot overflow the call stack through
recursive drops.
*/

use std::fmt;

use crate::element::Element;
use crate::error::{Error, Result};

/// A node owning the rest of the chain below it
struct Node {
    data: Element,
    next: Option<Box<Node>>,
}

/// Singly-linked-node stack (LIFO).
pub struct LinkedStack {
    /// Most recently pushed node, or `None` when empty
    top: Option<Box<Node>>,
    /// Chain length
    size: usize,
}

impl LinkedStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { top: None, size: 0 }
    }

    /// Pushes `e` as the new top node. O(1).
    pub fn push(&mut self, e: Element) {
        let node = Box::new(Node {
            data: e,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.size += 1;
    }

    /// Removes the top node and returns its value. O(1).
    ///
    /// Fails with `Error::EmptyStack` on an empty stack.
    pub fn pop(&mut self) -> Result<Element> {
        match self.top.take() {
            None => Err(Error::EmptyStack),
            Some(node) => {
                self.top = node.next;
                self.size -= 1;
                Ok(node.data)
            }
        }
    }

    /// Returns the value held by the top node, or `None` when empty.
    pub fn peek(&self) -> Option<Element> {
        self.top.as_ref().map(|node| node.data)
    }

    /// Releases every node from `top` to the end of the chain.
    pub fn clear(&mut self) {
        // Iterative release; letting the boxes drop recursively would
        // recurse once per node.
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }

    /// Current element count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Default for LinkedStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedStack {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Display for LinkedStack {
    /// Renders `size: <N>` followed by one line per element from top to
    /// bottom, the top line prefixed with `[TOP] `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}", self.size)?;
        let mut current = self.top.as_deref();
        let mut at_top = true;
        while let Some(node) = current {
            if at_top {
                write!(f, "[TOP] ")?;
                at_top = false;
            }
            writeln!(f, "{}", node.data.name())?;
            current = node.next.as_deref();
        }
        Ok(())
    }
}
