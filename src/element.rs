/*!
Element type stored by every collection.

The element is an opaque value drawn from a small closed enumeration. The
distinguished `Undefined` value is the sentinel used by `ArrayStack` to
mark vacated and padding slots. Canonical names live in an immutable
lookup table; there is no mutable global state behind the rendering.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Opaque value type stored by the collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Element {
    /// Sentinel marking vacated or padding slots
    #[default]
    Undefined,
    Earth,
    Water,
    Fire,
    Air,
}

/// Canonical names, indexed by discriminant
const ELEMENT_NAMES: [&str; 5] = ["UNDEFINED", "EARTH", "WATER", "FIRE", "AIR"];

impl Element {
    /// Returns the canonical name of the element.
    ///
    /// A pure lookup; the sentinel renders as `"UNDEFINED"` rather than
    /// being suppressed.
    pub fn name(self) -> &'static str {
        ELEMENT_NAMES[self as usize]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(Element::Undefined.name(), "UNDEFINED");
        assert_eq!(Element::Earth.name(), "EARTH");
        assert_eq!(Element::Water.name(), "WATER");
        assert_eq!(Element::Fire.name(), "FIRE");
        assert_eq!(Element::Air.name(), "AIR");
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Element::Fire.to_string(), "FIRE");
        assert_eq!(format!("{}", Element::Undefined), "UNDEFINED");
    }

    #[test]
    fn test_default_is_sentinel() {
        assert_eq!(Element::default(), Element::Undefined);
    }
}
