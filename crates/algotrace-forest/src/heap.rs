//! Array-backed binary max-heap.
//!
//! Index arithmetic: `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`,
//! `right(i) = 2i + 2`.

use std::fmt::Display;

use indexmap::IndexMap;

use crate::graph::{ToGraph, TreeGraph};

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Binary max-heap: every parent is `>=` its children.
#[derive(Clone, Debug, Default)]
pub struct MaxHeap<T> {
    a: Vec<T>,
}

impl<T> MaxHeap<T>
where
    T: PartialOrd + Copy,
{
    pub fn new() -> Self {
        Self { a: Vec::new() }
    }

    pub fn insert(&mut self, x: T) {
        self.a.push(x);
        self.sift_up(self.a.len() - 1);
    }

    /// Removes and returns the largest element; `None` when empty.
    pub fn extract_max(&mut self) -> Option<T> {
        let last = self.a.pop()?;
        if self.a.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.a[0], last);
        self.sift_down(0);
        Some(top)
    }

    pub fn peek(&self) -> Option<T> {
        self.a.first().copied()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.a[parent(i)] < self.a[i] {
            let p = parent(i);
            self.a.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.a.len();
        loop {
            let (l, r) = (left(i), right(i));
            let mut largest = i;
            if l < n && self.a[l] > self.a[largest] {
                largest = l;
            }
            if r < n && self.a[r] > self.a[largest] {
                largest = r;
            }
            if largest == i {
                break;
            }
            self.a.swap(i, largest);
            i = largest;
        }
    }

    /// `true` when every parent is `>=` each of its children.
    pub fn is_valid(&self) -> bool {
        (1..self.a.len()).all(|i| !(self.a[parent(i)] < self.a[i]))
    }

    /// Height of the implicit tree in edges; `-1` when empty.
    pub fn height(&self) -> i32 {
        match self.a.len() {
            0 => -1,
            n => n.ilog2() as i32,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.a
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

impl<T> FromIterator<T> for MaxHeap<T>
where
    T: PartialOrd + Copy,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for x in iter {
            heap.insert(x);
        }
        heap
    }
}

impl<T> ToGraph for MaxHeap<T>
where
    T: Display,
{
    /// The implicit tree; ids are array indices.
    fn graph(&self) -> TreeGraph {
        let n = self.a.len();
        let mut labels = IndexMap::with_capacity(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        for (i, x) in self.a.iter().enumerate() {
            labels.insert(i as u32, x.to_string());
            for c in [left(i), right(i)] {
                if c < n {
                    edges.push((i as u32, c as u32));
                }
            }
        }
        TreeGraph {
            edges,
            labels,
            root: if n > 0 { Some(0) } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_in_descending_order() {
        let mut h: MaxHeap<i32> = [3, 9, 1, 7, 5].into_iter().collect();
        assert!(h.is_valid());
        assert_eq!(h.peek(), Some(9));
        let mut out = Vec::new();
        while let Some(x) = h.extract_max() {
            assert!(h.is_valid());
            out.push(x);
        }
        assert_eq!(out, vec![9, 7, 5, 3, 1]);
        assert_eq!(h.height(), -1);
    }

    #[test]
    fn empty_extract_is_none() {
        let mut h = MaxHeap::<i32>::new();
        assert_eq!(h.extract_max(), None);
        h.insert(4);
        assert_eq!(h.extract_max(), Some(4));
        assert_eq!(h.extract_max(), None);
    }

    #[test]
    fn graph_follows_index_layout() {
        let h: MaxHeap<i32> = [1, 2, 3, 4].into_iter().collect();
        let g = h.graph();
        assert_eq!(g.root, Some(0));
        assert_eq!(g.edges, vec![(0, 1), (0, 2), (1, 3)]);
        assert_eq!(g.labels[&0], "4");
        assert_eq!(h.height(), 2);
    }
}
