use tracing::trace;

use crate::error::HeapError;

/// Binary max-heap stored as an implicit tree in a `Vec`.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            trace!("extract_max on empty heap");
            return Err(HeapError::Empty);
        }

        // Move the last leaf into the root slot, then restore order below it.
        let max = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(max)
    }

    pub fn peek_max(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The array layout, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.items[i] <= self.items[p] {
                break;
            }
            self.items.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let (l, r) = children(i);
            let mut largest = i;

            if l < len && self.items[l] > self.items[largest] {
                largest = l;
            }
            if r < len && self.items[r] > self.items[largest] {
                largest = r;
            }

            if largest == i {
                return;
            }
            self.items.swap(i, largest);
            i = largest;
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for item in iter {
            heap.insert(item);
        }
        heap
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn children(i: usize) -> (usize, usize) {
    (2 * i + 1, 2 * i + 2)
}
