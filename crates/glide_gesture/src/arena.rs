//! Bounded pointer arena
//!
//! Maps pointer ids to their latest sample. Slots keep insertion order so
//! "the first two pointers" is well defined, and the arena refuses new ids
//! once full so leaked pointer ids cannot grow it without bound.

use glide_core::GesturePoint;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of concurrently tracked pointers
pub const MAX_TRACKED_POINTERS: usize = 10;

/// A tracked pointer and its latest sample
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSlot {
    pub pointer_id: i32,
    pub point: GesturePoint,
}

/// Insertion-ordered map of pressed pointers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerArena {
    slots: SmallVec<[PointerSlot; 4]>,
}

impl PointerArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_TRACKED_POINTERS
    }

    pub fn contains(&self, pointer_id: i32) -> bool {
        self.position(pointer_id).is_some()
    }

    pub fn get(&self, pointer_id: i32) -> Option<&GesturePoint> {
        self.position(pointer_id).map(|i| &self.slots[i].point)
    }

    /// Insert or refresh a pointer.
    ///
    /// Returns false when the pointer is new and the arena is full; the
    /// pointer is not tracked in that case.
    pub fn insert(&mut self, pointer_id: i32, point: GesturePoint) -> bool {
        if let Some(i) = self.position(pointer_id) {
            self.slots[i].point = point;
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.slots.push(PointerSlot { pointer_id, point });
        true
    }

    /// Refresh an already tracked pointer. Unknown ids are left untouched.
    pub fn update(&mut self, pointer_id: i32, point: GesturePoint) -> bool {
        match self.position(pointer_id) {
            Some(i) => {
                self.slots[i].point = point;
                true
            }
            None => false,
        }
    }

    /// Evict a pointer, preserving the order of the remaining slots
    pub fn remove(&mut self, pointer_id: i32) -> Option<GesturePoint> {
        self.position(pointer_id).map(|i| self.slots.remove(i).point)
    }

    /// The two earliest inserted pointers still pressed
    pub fn first_two(&self) -> Option<(PointerSlot, PointerSlot)> {
        match self.slots.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerSlot> {
        self.slots.iter()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn position(&self, pointer_id: i32) -> Option<usize> {
        self.slots.iter().position(|s| s.pointer_id == pointer_id)
    }
}
