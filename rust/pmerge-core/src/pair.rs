//! Data model shared by both backings.

use crate::Element;

/// An element in flight through one recursion level.
///
/// `tag` is the element's index in the working set of the level that created
/// it. A level tags the majors it hands to the recursive call with their pair
/// index, which is how a sorted major finds its minor again without a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub value: Element,
    pub tag: usize,
}

impl Slot {
    pub fn new(value: Element, tag: usize) -> Self {
        Slot { value, tag }
    }
}

/// Two adjacent input elements, larger first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub major: Slot,
    pub minor: Slot,
}

impl Pair {
    /// Build a pair from two slots the caller has already ordered.
    pub fn new(major: Slot, minor: Slot) -> Self {
        debug_assert!(major.value >= minor.value);
        Pair { major, minor }
    }

    /// The value the next level sorts on, tagged with this pair's index.
    pub fn major_for_recursion(&self, pair_index: usize) -> Slot {
        Slot::new(self.major.value, pair_index)
    }
}
