/*!
Constants for the collections.
*/

/// Fixed additive amount by which `ArrayStack` grows its buffer when a push
/// finds the current capacity exhausted. Capacity never shrinks back.
pub const CAPACITY_GROWTH_INCREMENT: usize = 10;
