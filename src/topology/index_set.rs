//! Ordered Index Sets
//!
//! Adjacency is stored as a sorted, duplicate-free vector of point
//! indices. At the sizes this crate targets a sorted vector beats a hash
//! set on both speed and memory, and it iterates in ascending order, so
//! every result derived from it is deterministic.

/// Sorted set of point indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSet {
    indices: Vec<usize>,
}

impl IndexSet {
    pub fn new() -> Self {
        Self { indices: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    /// Insert an index, returning `false` if it was already present
    pub fn insert(&mut self, index: usize) -> bool {
        // Fast path: indices usually arrive in ascending order
        match self.indices.last() {
            Some(&last) if last < index => {
                self.indices.push(index);
                true
            }
            None => {
                self.indices.push(index);
                true
            }
            _ => match self.indices.binary_search(&index) {
                Ok(_) => false,
                Err(pos) => {
                    self.indices.insert(pos, index);
                    true
                }
            },
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Set intersection
    ///
    /// Walks the smaller set and probes the larger one, so the cost is
    /// O(min · log max). The result is sorted either way.
    pub fn intersection(&self, other: &IndexSet) -> IndexSet {
        let (small, large) = if other.len() < self.len() {
            (other, self)
        } else {
            (self, other)
        };

        let mut out = IndexSet::with_capacity(small.len());
        for index in small.iter() {
            if large.contains(index) {
                out.indices.push(index);
            }
        }
        out
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IndexSet::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}
