//! Capacity-bounded particle pools
//!
//! The pools are dense and unordered: removal swaps the last element into
//! the freed slot, so iteration order after a removal is unspecified and
//! no consumer may rely on it. At capacity, spawn attempts are dropped
//! silently rather than evicting or erroring.

/// A dense, capacity-bounded collection with O(1) insert and removal.
#[derive(Debug, Clone)]
pub struct ParticlePool<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ParticlePool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert if there is room. Returns false (and drops the item) at
    /// capacity; a full pool is not an error.
    pub fn push_if_room(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove by swapping the last element into the slot.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    /// Remove a batch of marked slots. Indices must be in ascending order;
    /// removing back-to-front keeps the remaining indices valid, which is
    /// what makes the mark-then-compact pass safe against the classic
    /// swap-remove-while-iterating skip.
    pub fn remove_marked(&mut self, marked: &[usize]) {
        for &index in marked.iter().rev() {
            self.items.swap_remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}
