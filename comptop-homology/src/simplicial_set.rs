use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_set;

use crate::{Error, Result, SimplexKey, SimplicialComplex};
use crate::chain::closure_euler_char;

/// A plain set of simplices of one complex, not closed under faces.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct SimplicialSet {
    set: BTreeSet<SimplexKey>
}

impl SimplicialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `key` was newly added.
    pub fn add(&mut self, key: SimplexKey) -> bool {
        self.set.insert(key)
    }

    /// Returns whether `key` was present.
    pub fn remove(&mut self, key: &SimplexKey) -> bool {
        self.set.remove(key)
    }

    pub fn contains(&self, key: &SimplexKey) -> bool {
        self.set.contains(key)
    }

    pub fn card(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, SimplexKey> {
        self.set.iter()
    }

    pub fn union(&self, other: &SimplicialSet) -> SimplicialSet {
        self.set.union(&other.set).cloned().collect()
    }

    /// The keys grouped by dimension.
    pub fn ranked(&self) -> BTreeMap<usize, Vec<SimplexKey>> {
        let mut res = BTreeMap::<usize, Vec<_>>::new();
        for &k in self.set.iter() {
            res.entry(k.dim()).or_default().push(k);
        }
        res
    }

    /// The Euler characteristic of the smallest subcomplex containing the set.
    pub fn euler_char(&self, complex: &SimplicialComplex) -> Result<i64> {
        let simplices = self.set.iter().map(|&k| {
            complex.simplex(k).ok_or_else(|| {
                let len = complex.chain_group(k.dim()).map_or(0, |g| g.rank());
                Error::IndexOutOfRange { index: k.index(), len }
            })
        }).collect::<Result<Vec<_>>>()?;

        Ok(closure_euler_char(simplices))
    }
}

impl FromIterator<SimplexKey> for SimplicialSet {
    fn from_iter<T: IntoIterator<Item = SimplexKey>>(iter: T) -> Self {
        Self { set: iter.into_iter().collect() }
    }
}

impl Extend<SimplexKey> for SimplicialSet {
    fn extend<T: IntoIterator<Item = SimplexKey>>(&mut self, iter: T) {
        self.set.extend(iter)
    }
}

impl<'a> IntoIterator for &'a SimplicialSet {
    type Item = &'a SimplexKey;
    type IntoIter = btree_set::Iter<'a, SimplexKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
