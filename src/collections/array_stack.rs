/*!
Array-backed stack over a contiguous, exclusively owned buffer.

The buffer has a fixed allocated length. A push that finds the buffer full
grows it by `CAPACITY_GROWTH_INCREMENT`, moving every valid element into
the new allocation; capacity never shrinks afterwards. Slots past the
logical length are kept filled with the `Undefined` sentinel.
*/

use std::fmt;
use std::mem;

use crate::constants::CAPACITY_GROWTH_INCREMENT;
use crate::element::Element;
use crate::error::{Error, Result};

/// Growable contiguous-buffer stack (LIFO).
///
/// Indices `[0, size)` hold pushed values in push order — index 0 is the
/// bottom, index `size - 1` the top. Everything above `size` is sentinel
/// padding from construction or the last growth.
pub struct ArrayStack {
    /// Exclusively owned contiguous storage; its length is the capacity
    data: Box<[Element]>,
    /// Count of logically valid elements
    size: usize,
}

impl ArrayStack {
    /// Creates a stack with a sentinel-initialized buffer of exactly
    /// `initial_capacity` slots.
    ///
    /// Fails with `Error::InvalidCapacity` if `initial_capacity` is zero;
    /// no partial object is produced.
    pub fn new(initial_capacity: usize) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            data: vec![Element::Undefined; initial_capacity].into_boxed_slice(),
            size: 0,
        })
    }

    /// Pushes `e` on top of the stack, growing the buffer first if it is
    /// full. Growth is additive and never triggered otherwise.
    pub fn push(&mut self, e: Element) {
        if self.size == self.data.len() {
            self.grow(self.data.len() + CAPACITY_GROWTH_INCREMENT);
        }
        self.data[self.size] = e;
        self.size += 1;
    }

    /// Removes and returns the top element.
    ///
    /// Fails with `Error::EmptyStack` on an empty stack, leaving it
    /// unchanged. The vacated slot is overwritten with the sentinel so the
    /// buffer never holds stale data.
    pub fn pop(&mut self) -> Result<Element> {
        if self.size == 0 {
            return Err(Error::EmptyStack);
        }
        self.size -= 1;
        Ok(mem::replace(&mut self.data[self.size], Element::Undefined))
    }

    /// Returns the top element without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<Element> {
        if self.size == 0 {
            None
        } else {
            Some(self.data[self.size - 1])
        }
    }

    /// Resets every occupied slot to the sentinel and the length to zero.
    /// Capacity is retained.
    pub fn clear(&mut self) {
        self.data[..self.size].fill(Element::Undefined);
        self.size = 0;
    }

    /// Current element count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Allocated buffer length. Monotonically non-decreasing.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reallocates the buffer at `new_capacity`, copying all `size` valid
    /// elements across and sentinel-initializing the new slots.
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.size);

        let mut new_data = vec![Element::Undefined; new_capacity].into_boxed_slice();
        new_data[..self.size].copy_from_slice(&self.data[..self.size]);
        self.data = new_data;
    }
}

impl fmt::Display for ArrayStack {
    /// Renders `size: <N>` followed by one line per element from top to
    /// bottom, the top line prefixed with `[TOP] `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}", self.size)?;
        for index in (0..self.size).rev() {
            if index == self.size - 1 {
                write!(f, "[TOP] ")?;
            }
            writeln!(f, "{}", self.data[index].name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert_eq!(ArrayStack::new(0).err(), Some(Error::InvalidCapacity));
    }

    #[test]
    fn test_new_allocates_exact_capacity() {
        let stack = ArrayStack::new(7).unwrap();
        assert_eq!(stack.capacity(), 7);
        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_pop_lifo_order() {
        let mut stack = ArrayStack::new(4).unwrap();
        stack.push(Element::Earth);
        stack.push(Element::Water);
        stack.push(Element::Fire);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.pop().unwrap(), Element::Fire);
        assert_eq!(stack.pop().unwrap(), Element::Water);
        assert_eq!(stack.pop().unwrap(), Element::Earth);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack = ArrayStack::new(2).unwrap();
        assert_eq!(stack.pop().err(), Some(Error::EmptyStack));

        // The failed pop must not have mutated anything
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.capacity(), 2);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = ArrayStack::new(2).unwrap();
        assert_eq!(stack.peek(), None);

        stack.push(Element::Air);
        assert_eq!(stack.peek(), Some(Element::Air));
        assert_eq!(stack.peek(), Some(Element::Air));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_growth_is_one_increment() {
        let mut stack = ArrayStack::new(3).unwrap();
        for _ in 0..3 {
            stack.push(Element::Water);
        }
        assert_eq!(stack.capacity(), 3);

        // One element past capacity triggers exactly one growth
        stack.push(Element::Fire);
        assert_eq!(stack.capacity(), 3 + CAPACITY_GROWTH_INCREMENT);
        assert_eq!(stack.size(), 4);
    }

    #[test]
    fn test_growth_preserves_all_elements() {
        let elements = [
            Element::Earth,
            Element::Water,
            Element::Fire,
            Element::Air,
            Element::Earth,
        ];
        let mut stack = ArrayStack::new(4).unwrap();
        for e in elements {
            stack.push(e);
        }

        // Every element survives the reallocation, top included
        for e in elements.iter().rev() {
            assert_eq!(stack.peek(), Some(*e));
            assert_eq!(stack.pop().unwrap(), *e);
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_sentinels_vacated_slot() {
        let mut stack = ArrayStack::new(2).unwrap();
        stack.push(Element::Fire);
        stack.push(Element::Air);
        stack.pop().unwrap();

        assert_eq!(stack.data[1], Element::Undefined);
        assert_eq!(stack.data[0], Element::Fire);
    }

    #[test]
    fn test_clear_retains_capacity() {
        let mut stack = ArrayStack::new(2).unwrap();
        for _ in 0..5 {
            stack.push(Element::Earth);
        }
        let grown = stack.capacity();

        stack.clear();
        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.capacity(), grown);
        assert!(stack.data.iter().all(|e| *e == Element::Undefined));

        // Still usable after clear
        stack.push(Element::Water);
        assert_eq!(stack.peek(), Some(Element::Water));
    }

    #[test]
    fn test_display_contract() {
        let mut stack = ArrayStack::new(4).unwrap();
        assert_eq!(stack.to_string(), "size: 0\n");

        stack.push(Element::Earth);
        stack.push(Element::Fire);
        assert_eq!(stack.to_string(), "size: 2\n[TOP] FIRE\nEARTH\n");
    }
}
