/*!
A max heap on some subset of elements with fixed indicies.

The heap is backed by a vector of values, with a companion vector recording where (if anywhere) the index of each value sits on the heap.
The backing vector stays constant, so the heap acts as a store of values, some of which are *active* on the heap.

[IndexHeap] is used as a store of [atom](crate::structures::atom) activity, where an atom is active on the heap whenever it has no value.
This gives quick access to the most active atom without a value when a decision is made.

```rust
# use websat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));

assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by value index.
    values: Vec<V>,

    /// The position on the heap of each value index, if active.
    position_in_heap: Vec<Option<usize>>,

    /// The heap, as a vector of value indicies.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `value_index`, growing the store as needed.
    /// Returns true if `value_index` was a fresh index, false otherwise.
    ///
    /// The index is not active on the heap until [activate](IndexHeap::activate) is called.
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        let fresh = self.values.len() <= value_index;
        if fresh {
            self.values.resize_with(value_index + 1, V::default);
            self.position_in_heap.resize(value_index + 1, None);
        }
        self.revalue(value_index, value);
        fresh
    }

    /// Remove `value_index` from the heap, if active.
    /// Returns true if `value_index` was removed, false otherwise.
    pub fn remove(&mut self, value_index: usize) -> bool {
        let Some(heap_index) = self.heap_index(value_index) else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap_heap(heap_index, last);
        self.heap.pop();
        self.position_in_heap[value_index] = None;

        if heap_index < self.heap.len() {
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
        true
    }

    /// Activate `value_index` on the heap.
    /// Returns true if the index was inactive, false otherwise.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.heap_index(value_index) {
            None => {
                let heap_index = self.heap.len();
                self.heap.push(value_index);
                self.position_in_heap[value_index] = Some(heap_index);
                self.heapify_up(heap_index);
                true
            }
            Some(heap_index) => {
                self.heapify_up(heap_index);
                self.heapify_down(heap_index);
                false
            }
        }
    }

    /// Whether `value_index` is active on the heap.
    pub fn is_active(&self, value_index: usize) -> bool {
        self.heap_index(value_index).is_some()
    }

    /// Restore the heap invariant around `value_index`, if active.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if let Some(heap_index) = self.heap_index(value_index) {
            self.heapify_up(heap_index);
            if let Some(heap_index) = self.heap_index(value_index) {
                self.heapify_down(heap_index);
            }
        }
    }

    /// Peek at the index of the maximum value on the heap.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Peek at the maximum value on the heap.
    pub fn peek_max_value(&self) -> Option<&V> {
        self.peek_max().map(|value_index| self.value_at(value_index))
    }

    /// Pop the index of the maximum value off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max_index = self.peek_max()?;
        self.remove(max_index);
        Some(max_index)
    }

    /// Restore the heap invariant across the whole heap.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.heapify_down(heap_index)
        }
    }

    /// The value indexed by `value_index`.
    ///
    /// # Panics
    /// If `value_index` was never added.
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Apply `f` to all values.
    ///
    /// The heap is not reordered, and so `f` should be monotone or followed by a call to [heapify](IndexHeap::heapify).
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Set the value of `value_index` to `value`, without reordering the heap.
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of values active on the heap.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no value is active on the heap, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn heap_index(&self, value_index: usize) -> Option<usize> {
        self.position_in_heap.get(value_index).copied().flatten()
    }

    fn value_of_heap_index(&self, heap_index: usize) -> &V {
        &self.values[self.heap[heap_index]]
    }

    /// Swaps two positions on the heap, keeping the position records in step.
    fn swap_heap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = Some(a);
        self.position_in_heap[self.heap[b]] = Some(b);
    }

    fn heapify_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            let right = left + 1;
            let mut largest = heap_index;

            if left < self.heap.len()
                && self.value_of_heap_index(left) > self.value_of_heap_index(largest)
            {
                largest = left;
            }
            if right < self.heap.len()
                && self.value_of_heap_index(right) > self.value_of_heap_index(largest)
            {
                largest = right;
            }

            if largest == heap_index {
                break;
            }
            self.swap_heap(heap_index, largest);
            heap_index = largest;
        }
    }

    fn heapify_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if self.value_of_heap_index(heap_index) > self.value_of_heap_index(parent) {
                self.swap_heap(heap_index, parent);
                heap_index = parent;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_order() {
        let mut heap = IndexHeap::default();
        for (index, value) in [(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)] {
            heap.add(index, value);
            heap.activate(index);
        }

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert!(heap.is_empty());
    }

    #[test]
    fn revalue_then_heapify() {
        let mut heap = IndexHeap::default();
        for (index, value) in [(6, 10), (4, 30), (1, 60), (0, 70)] {
            heap.add(index, value);
            heap.activate(index);
        }

        for index in [0, 1, 4, 6] {
            heap.revalue(index, index as i32);
        }
        heap.heapify();

        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn bump_while_active() {
        let mut heap = IndexHeap::default();
        for index in 0..8 {
            heap.add(index, index as f64);
            heap.activate(index);
        }
        heap.revalue(2, 100.0);
        heap.heapify_if_active(2);
        assert_eq!(heap.peek_max(), Some(2));
        assert_eq!(heap.peek_max_value(), Some(&100.0));
    }

    #[test]
    fn remove_and_reactivate() {
        let mut heap = IndexHeap::default();
        for index in [6, 5, 4, 1, 0] {
            heap.add(index, index as i32);
            heap.activate(index);
        }

        assert!(heap.remove(4));
        assert!(!heap.remove(4));
        assert!(!heap.is_active(4));
        assert!(heap.remove(6));
        assert!(!heap.add(4, 10));
        assert!(!heap.add(4, 2));
        assert!(heap.activate(4));
        assert!(!heap.activate(4));

        assert_eq!(heap.active_count(), 4);
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
    }
}
