use std::sync::atomic::{AtomicU64, Ordering};
use ahash::AHashSet;
use derive_more::Display;
use itertools::Itertools;
use log::{debug, trace};
use comptop::Memo;

use crate::{ChainGroup, Simplex, SimplexKey, SimplicialSet};

/// A process-unique tag for a complex; chains carry it so that chains
/// of different complexes are never combined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display)]
#[display("complex#{_0}")]
pub struct ComplexId(u64);

impl ComplexId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// An abstract simplicial complex, stored as one chain group per
/// dimension. Every face of every simplex is present, so the chain
/// groups `0..=dim` are all non-empty.
#[derive(Debug)]
pub struct SimplicialComplex {
    id: ComplexId,
    groups: Vec<ChainGroup>,
    euler_char: Memo<i64>,
}

impl SimplicialComplex {
    pub fn new() -> Self {
        Self {
            id: ComplexId::next(),
            groups: vec![],
            euler_char: Memo::new(),
        }
    }

    pub fn from_bases<I, B>(bases: I) -> Self
    where I: IntoIterator<Item = B>, B: IntoIterator<Item = usize> {
        let mut c = Self::new();
        c.add_simplices(bases);
        c
    }

    pub fn id(&self) -> ComplexId {
        self.id
    }

    /// The top dimension, or `None` for the empty complex.
    pub fn dim(&self) -> Option<usize> {
        self.groups.len().checked_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn chain_group(&self, p: usize) -> Option<&ChainGroup> {
        self.groups.get(p)
    }

    pub fn chain_groups(&self) -> impl Iterator<Item = &ChainGroup> {
        self.groups.iter()
    }

    /// The p-simplices in basis order; empty above the top dimension.
    pub fn simplices(&self, p: usize) -> impl Iterator<Item = &Simplex> {
        self.groups.get(p).into_iter().flat_map(|g| g.elements())
    }

    pub fn num_simplices(&self) -> usize {
        self.groups.iter().map(|g| g.rank()).sum()
    }

    pub fn simplex(&self, key: SimplexKey) -> Option<&Simplex> {
        self.groups.get(key.dim())?.element(key.index())
    }

    pub fn get_simplex<I>(&self, vertices: I) -> Option<SimplexKey>
    where I: IntoIterator<Item = usize> {
        let s = Simplex::new(vertices);
        self.key_of(&s)
    }

    pub fn key_of(&self, s: &Simplex) -> Option<SimplexKey> {
        let p = s.dim();
        let i = self.groups.get(p)?.index_of(s)?;
        Some(SimplexKey::new(p, i))
    }

    /// Adds the simplex spanned by `vertices` together with all of its
    /// faces, and returns its key. Adding an existing simplex is a no-op.
    ///
    /// Panics if `vertices` is empty.
    pub fn add_simplex<I>(&mut self, vertices: I) -> SimplexKey
    where I: IntoIterator<Item = usize> {
        let s = Simplex::new(vertices);
        if let Some(key) = self.key_of(&s) {
            return key
        }

        trace!("add {s} to {}", self.id);

        for d in 0..s.dim() {
            for f in s.faces_of_dim(d) {
                self.insert(f);
            }
        }
        self.insert(s)
    }

    /// Adds each simplex as in `add_simplex`, returning the set of their keys.
    pub fn add_simplices<I, B>(&mut self, bases: I) -> SimplicialSet
    where I: IntoIterator<Item = B>, B: IntoIterator<Item = usize> {
        bases.into_iter().map(|b| self.add_simplex(b)).collect()
    }

    fn insert(&mut self, s: Simplex) -> SimplexKey {
        let p = s.dim();
        while self.groups.len() <= p {
            let d = self.groups.len();
            debug!("{}: new chain group C_{d}", self.id);
            self.groups.push(ChainGroup::new(self.id, d));
        }

        let (i, added) = self.groups[p].push(s);
        if added {
            self.invalidate(p);
        }
        SimplexKey::new(p, i)
    }

    // a p-simplex was added to C_p.
    fn invalidate(&mut self, p: usize) {
        if p > 0 {
            self.groups[p - 1].invalidate_upper();
        }
        self.groups[p].invalidate_all();
        if let Some(g) = self.groups.get_mut(p + 1) {
            g.invalidate_lower();
        }
        self.euler_char.invalidate();
    }

    /// Simplices that are not a face of any other simplex.
    pub fn principal_simplices(&self) -> SimplicialSet {
        let mut set = SimplicialSet::new();
        for (p, g) in self.groups.iter().enumerate() {
            let covered: AHashSet<Simplex> = self.simplices(p + 1).flat_map(|t| t.faces()).collect();
            for (i, s) in g.elements().enumerate() {
                if !covered.contains(s) {
                    set.add(SimplexKey::new(p, i));
                }
            }
        }
        set
    }

    /// The alternating sum of the ranks of the chain groups.
    pub fn euler_char(&self) -> i64 {
        *self.euler_char.get_or_init(|| {
            self.groups.iter().map(|g| {
                let r = g.rank() as i64;
                if g.dim() % 2 == 0 { r } else { -r }
            }).sum()
        })
    }

    /// The smallest subcomplex containing every simplex that satisfies `pred`.
    pub fn subcomplex<F>(&self, pred: F) -> SimplicialComplex
    where F: Fn(&Simplex) -> bool {
        let mut c = SimplicialComplex::new();
        for g in self.groups.iter().rev() {
            for s in g.elements() {
                if c.key_of(s).is_none() && pred(s) {
                    c.add_simplex(s.vertices().iter().cloned());
                }
            }
        }
        c
    }
}

impl Default for SimplicialComplex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SimplicialComplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let principal = self.principal_simplices();
        let list = principal.iter().rev().filter_map(|&k| self.simplex(k)).join(", ");
        write!(f, "{{{list}}}")
    }
}
