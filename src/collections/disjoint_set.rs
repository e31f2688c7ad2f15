//! Disjoint-set (Union-Find) over arbitrary hashable elements.
//!
//! Partitions a growing universe of elements into disjoint equivalence
//! classes. Elements join the structure the first time they are referenced
//! by [`DisjointSet::find`], [`DisjointSet::union`] or
//! [`DisjointSet::connected`]; there is no explicit insert and no removal.
//!
//! # Algorithm
//!
//! Uses **full path compression** during `find`: after the root of an
//! element is located, every node on the walked path is re-pointed
//! directly at that root. The walk is iterative (one pass up, one pass
//! rewriting), so arbitrarily long uncompressed chains cannot overflow the
//! stack.
//!
//! `union` does **not** balance by rank or size. The root of the first
//! argument is always attached under the root of the second argument, so
//! the second argument's representative survives the merge. Callers rely
//! on which label survives; this is part of the contract.
//!
//! # Storage
//!
//! Elements are interned into dense indices in order of first reference.
//! Parent links are stored as indices, which keeps enumeration and
//! formatting deterministic (insertion order) without imposing `Ord` on `T`.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

/// Disjoint-set forest keyed by element value, with path compression.
///
/// # Examples
/// ```
/// use disjoint_set::DisjointSet;
///
/// let mut ds = DisjointSet::new();
/// assert!(ds.is_empty());
///
/// ds.union(1, 2);
/// assert_eq!(ds.find(1), 2); // second argument's root survives
/// assert!(ds.connected(1, 2));
/// assert!(!ds.connected(1, 3));
///
/// // `connected` auto-vivified 3 as a singleton class.
/// assert!(ds.contains(&3));
/// assert_eq!(ds.iter_sets().count(), 2);
/// ```
#[derive(Clone)]
pub struct DisjointSet<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
}

impl<T> DisjointSet<T> {
    /// Creates an empty structure.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
        }
    }

    /// Creates an empty structure with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements ever referenced.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element has ever been referenced.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Root index of `idx` without compressing the path.
    fn peek_root(&self, idx: usize) -> usize {
        let mut root = idx;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Root index of `idx`, re-pointing every node on the path at the root.
    fn root_index(&mut self, idx: usize) -> usize {
        let root = self.peek_root(idx);

        let mut cur = idx;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Groups element indices by root, classes ordered by their first
    /// inserted member. Read-only: no compression.
    fn peek_classes(&self) -> Vec<(usize, Vec<usize>)> {
        let mut slot: HashMap<usize, usize> = HashMap::new();
        let mut classes: Vec<(usize, Vec<usize>)> = Vec::new();
        for idx in 0..self.elements.len() {
            let root = self.peek_root(idx);
            let pos = *slot.entry(root).or_insert_with(|| {
                classes.push((root, Vec::new()));
                classes.len() - 1
            });
            classes[pos].1.push(idx);
        }
        classes
    }
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Returns `true` if `x` has ever been referenced.
    ///
    /// Unlike the other queries this never inserts `x`.
    pub fn contains(&self, x: &T) -> bool {
        self.index.contains_key(x)
    }

    /// Index of `x`, inserting it as its own root if unseen.
    fn intern(&mut self, x: T) -> usize {
        match self.index.entry(x) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let idx = self.elements.len();
                self.elements.push(entry.key().clone());
                self.parent.push(idx);
                entry.insert(idx);
                idx
            }
        }
    }

    /// Returns the representative (root) of the class containing `x`.
    ///
    /// If `x` is unseen it is inserted as a singleton class and returned.
    /// Applies full path compression, hence `&mut self`.
    ///
    /// # Complexity
    /// Amortized O(log n)
    ///
    /// # Examples
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut ds = DisjointSet::new();
    /// assert_eq!(ds.find(1), 1);
    /// ds.union(1, 2);
    /// assert_eq!(ds.find(1), 2);
    /// ```
    pub fn find(&mut self, x: T) -> T {
        let idx = self.intern(x);
        let root = self.root_index(idx);
        self.elements[root].clone()
    }

    /// Merges the classes containing `x` and `y`.
    ///
    /// The root of `x` is attached under the root of `y`, so `y`'s
    /// representative becomes the representative of the merged class.
    /// No-op if both are already in the same class. Both elements are
    /// inserted if unseen.
    ///
    /// # Complexity
    /// Amortized O(log n)
    pub fn union(&mut self, x: T, y: T) {
        let x = self.intern(x);
        let y = self.intern(y);
        let root_x = self.root_index(x);
        let root_y = self.root_index(y);
        if root_x != root_y {
            self.parent[root_x] = root_y;
        }
    }

    /// Returns `true` if `x` and `y` are in the same class.
    ///
    /// Both elements are inserted if unseen, so on a fresh structure this
    /// returns `false` for distinct values and `true` for `connected(x, x)`.
    pub fn connected(&mut self, x: T, y: T) -> bool {
        let x = self.intern(x);
        let y = self.intern(y);
        self.root_index(x) == self.root_index(y)
    }

    /// Returns a lazy iterator of `(element, root)` pairs, one per known
    /// element in insertion order.
    ///
    /// Each step performs a `find`, so iterating compresses paths. Every
    /// call starts a fresh pass over the current state.
    pub fn iter(&mut self) -> Iter<'_, T> {
        Iter { set: self, next: 0 }
    }

    /// Returns an iterator over the equivalence classes.
    ///
    /// The grouping is recomputed from scratch on every call (compressing
    /// every path as a side effect). Classes are pairwise disjoint and
    /// together cover every known element.
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashSet;
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut ds = DisjointSet::new();
    /// ds.union(1, 2);
    /// let sets: Vec<HashSet<i32>> = ds.iter_sets().collect();
    /// assert_eq!(sets, vec![HashSet::from([1, 2])]);
    /// ```
    pub fn iter_sets(&mut self) -> IterSets<T> {
        let mut slot: HashMap<usize, usize> = HashMap::new();
        let mut classes: Vec<HashSet<T>> = Vec::new();
        for idx in 0..self.elements.len() {
            let root = self.root_index(idx);
            let pos = *slot.entry(root).or_insert_with(|| {
                classes.push(HashSet::new());
                classes.len() - 1
            });
            classes[pos].insert(self.elements[idx].clone());
        }
        IterSets {
            inner: classes.into_iter(),
        }
    }
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Extend<(T, T)> for DisjointSet<T> {
    /// Applies [`DisjointSet::union`] to each pair in order.
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.union(x, y);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<(T, T)> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut ds = Self::new();
        ds.extend(iter);
        ds
    }
}

impl<T: fmt::Debug> fmt::Debug for DisjointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisjointSet(")?;
        for (i, (root, members)) in self.peek_classes().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?} <- ", self.elements[root])?;
            f.debug_list()
                .entries(members.iter().map(|&m| &self.elements[m]))
                .finish()?;
        }
        write!(f, ")")
    }
}

impl<T: fmt::Display> fmt::Display for DisjointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisjointSet(")?;
        for (i, (root, members)) in self.peek_classes().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} <- [", self.elements[root])?;
            for (j, &m) in members.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.elements[m])?;
            }
            write!(f, "]")?;
        }
        write!(f, ")")
    }
}

/// Lazy `(element, root)` iterator returned by [`DisjointSet::iter`].
pub struct Iter<'a, T> {
    set: &'a mut DisjointSet<T>,
    next: usize,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.set.elements.len() {
            return None;
        }
        let idx = self.next;
        self.next += 1;
        let root = self.set.root_index(idx);
        Some((self.set.elements[idx].clone(), self.set.elements[root].clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.elements.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}
impl<T: Clone> FusedIterator for Iter<'_, T> {}

/// Iterator over equivalence classes returned by [`DisjointSet::iter_sets`].
pub struct IterSets<T> {
    inner: std::vec::IntoIter<HashSet<T>>,
}

impl<T> Iterator for IterSets<T> {
    type Item = HashSet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterSets<T> {}
impl<T> FusedIterator for IterSets<T> {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn build(ops: &[(u8, u8)]) -> DisjointSet<u8> {
        ops.iter().copied().collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn equivalence_relation(
            ops in proptest::collection::vec((0_u8..16, 0_u8..16), 0..40),
        ) {
            let mut ds = build(&ops);
            for x in 0_u8..16 {
                prop_assert!(ds.connected(x, x), "reflexivity violated for {x}");
                for y in 0_u8..16 {
                    prop_assert_eq!(ds.connected(x, y), ds.connected(y, x));
                    for z in 0_u8..16 {
                        if ds.connected(x, y) && ds.connected(y, z) {
                            prop_assert!(
                                ds.connected(x, z),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn find_is_stable(
            ops in proptest::collection::vec((0_u8..16, 0_u8..16), 0..40),
            x in 0_u8..16,
        ) {
            let mut ds = build(&ops);
            let first = ds.find(x);
            prop_assert_eq!(ds.find(x), first);
            prop_assert_eq!(ds.find(first), first);
        }

        #[test]
        fn union_is_permanent(
            ops in proptest::collection::vec((0_u8..16, 0_u8..16), 1..40),
        ) {
            let mut ds = DisjointSet::new();
            for (i, &(x, y)) in ops.iter().enumerate() {
                ds.union(x, y);
                for &(a, b) in &ops[..=i] {
                    prop_assert!(ds.connected(a, b), "{a} and {b} drifted apart");
                }
            }
        }

        #[test]
        fn union_survivor_is_second_root(
            ops in proptest::collection::vec((0_u8..16, 0_u8..16), 0..40),
            x in 0_u8..16,
            y in 0_u8..16,
        ) {
            let mut ds = build(&ops);
            let root_y = ds.find(y);
            ds.union(x, y);
            prop_assert_eq!(ds.find(x), root_y);
            prop_assert_eq!(ds.find(y), root_y);
        }

        #[test]
        fn union_is_idempotent(
            ops in proptest::collection::vec((0_u8..16, 0_u8..16), 0..40),
            x in 0_u8..16,
            y in 0_u8..16,
        ) {
            let mut once = build(&ops);
            once.union(x, y);
            let mut twice = build(&ops);
            twice.union(x, y);
            twice.union(x, y);
            let a: Vec<(u8, u8)> = once.iter().collect();
            let b: Vec<(u8, u8)> = twice.iter().collect();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn sets_partition_known_elements(
            ops in proptest::collection::vec((0_u8..32, 0_u8..32), 0..60),
        ) {
            let mut ds = build(&ops);
            let sets: Vec<HashSet<u8>> = ds.iter_sets().collect();

            let mut seen = HashSet::new();
            for set in &sets {
                prop_assert!(!set.is_empty());
                for &x in set {
                    prop_assert!(seen.insert(x), "{x} appears in two classes");
                }
            }
            let known: HashSet<u8> = ops.iter().flat_map(|&(x, y)| [x, y]).collect();
            prop_assert_eq!(seen, known);

            for set in &sets {
                let mut members = set.iter().copied();
                if let Some(first) = members.next() {
                    let root = ds.find(first);
                    for m in members {
                        prop_assert_eq!(ds.find(m), root);
                    }
                }
            }
        }

        #[test]
        fn iter_pairs_match_find(
            ops in proptest::collection::vec((0_u8..16, 0_u8..16), 0..40),
        ) {
            let mut ds = build(&ops);
            let pairs: Vec<(u8, u8)> = ds.iter().collect();
            prop_assert_eq!(pairs.len(), ds.len());
            for (x, root) in pairs {
                prop_assert_eq!(ds.find(x), root);
                prop_assert_eq!(ds.find(root), root);
            }
        }
    }
}
