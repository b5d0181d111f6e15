//! Array-backed binary heap with a construction-time ordering.
//!
//! The direction ([`HeapOrder::Min`] or [`HeapOrder::Max`]) is resolved once into a
//! comparison function when the heap is created; sifting never re-inspects the order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeapOrder {
    /// Smallest element on top.
    Min,
    /// Largest element on top.
    Max,
}

impl HeapOrder {
    fn comparator<T: Ord>(self) -> fn(&T, &T) -> bool {
        match self {
            HeapOrder::Min => less::<T>,
            HeapOrder::Max => greater::<T>,
        }
    }
}

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

#[derive(Clone)]
pub struct Heap<T: Ord> {
    order: HeapOrder,
    // `above(a, b)` holds when `a` must sit closer to the root than `b`.
    above: fn(&T, &T) -> bool,
    data: Vec<T>,
}

impl<T: Ord + std::fmt::Debug> std::fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("order", &self.order)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Ord> Heap<T> {
    pub fn new(order: HeapOrder) -> Self {
        Self {
            order,
            above: order.comparator(),
            data: Vec::new(),
        }
    }

    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Heapifies `items` in place in O(n).
    pub fn from_vec(order: HeapOrder, items: Vec<T>) -> Self {
        let mut heap = Self {
            order,
            above: order.comparator(),
            data: items,
        };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the top element, or `None` when empty.
    pub fn extract_top(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(v) = self.extract_top() {
            out.push(v);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !(self.above)(&self.data[i], &self.data[parent]) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && (self.above)(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < n && (self.above)(&self.data[right], &self.data[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}
