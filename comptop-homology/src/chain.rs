use std::collections::BTreeSet;
use ahash::AHashSet;
use itertools::Itertools;
use num_traits::{One, Zero};
use comptop::F2;
use comptop_matrix::dense::MatType;

use crate::{ChainGroup, ComplexId, Error, Result, Simplex, SimplicialComplex};

/// A p-chain with GF(2) coefficients, stored as the set of basis
/// indices whose coefficient is 1.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Chain {
    complex: ComplexId,
    dim: usize,
    rank: usize,
    support: BTreeSet<usize>
}

impl Chain {
    pub fn zero(group: &ChainGroup) -> Self {
        Self {
            complex: group.complex_id(),
            dim: group.dim(),
            rank: group.rank(),
            support: BTreeSet::new()
        }
    }

    /// Repeated indices cancel.
    pub fn from_indices<I>(group: &ChainGroup, indices: I) -> Result<Self>
    where I: IntoIterator<Item = usize> {
        let mut c = Self::zero(group);
        for i in indices {
            if i >= c.rank {
                return Err(Error::IndexOutOfRange { index: i, len: c.rank })
            }
            c.toggle(i);
        }
        Ok(c)
    }

    pub fn from_vector(group: &ChainGroup, vec: &[F2]) -> Result<Self> {
        let mut c = Self::zero(group);
        if vec.len() != c.rank {
            return Err(Error::DimensionMismatch(format!(
                "vector of length {} in C_{} of rank {}", vec.len(), c.dim, c.rank
            )))
        }
        c.support = vec.iter().positions(|a| a.is_one()).collect();
        Ok(c)
    }

    pub fn complex_id(&self) -> ComplexId {
        self.complex
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The rank of the chain group when this chain was created.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The coefficient vector, of length `rank()`.
    pub fn vector(&self) -> Vec<F2> {
        let mut v = vec![F2::zero(); self.rank];
        for &i in self.support.iter() {
            v[i] = F2::one();
        }
        v
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.support.iter().cloned()
    }

    /// Hamming weight.
    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_zero(&self) -> bool {
        self.support.is_empty()
    }

    pub fn contains(&self, i: usize) -> bool {
        self.support.contains(&i)
    }

    pub fn add_chain(&self, other: &Chain) -> Result<Chain> {
        self.check_compatible(other)?;
        let support = self.support.symmetric_difference(&other.support).cloned().collect();
        Ok(self.with_support(support))
    }

    pub fn intersection(&self, other: &Chain) -> Result<Chain> {
        self.check_compatible(other)?;
        let support = self.support.intersection(&other.support).cloned().collect();
        Ok(self.with_support(support))
    }

    pub fn simplices<'a>(&self, complex: &'a SimplicialComplex) -> Result<Vec<&'a Simplex>> {
        let group = self.group_in(complex)?;
        self.indices().map(|i|
            group.element(i).ok_or(Error::IndexOutOfRange { index: i, len: group.rank() })
        ).collect()
    }

    /// ∂_p applied to this chain, read off the columns of the boundary matrix.
    pub fn boundary(&self, complex: &SimplicialComplex) -> Result<Chain> {
        if self.dim == 0 {
            return Err(Error::DimensionMismatch("a 0-chain has no boundary chain".into()))
        }

        self.group_in(complex)?;

        let lower = complex.chain_group(self.dim - 1).ok_or(
            Error::IndexOutOfRange { index: self.dim - 1, len: complex.num_groups() }
        )?;
        let d = complex.boundary_map(self.dim)?.boundary_matrix();

        let mut b = Chain::zero(lower);
        for j in self.indices() {
            for i in 0..d.rows() {
                if d[(i, j)].is_one() {
                    b.toggle(i);
                }
            }
        }
        Ok(b)
    }

    /// The Euler characteristic of the subcomplex spanned by the support.
    pub fn euler_char(&self, complex: &SimplicialComplex) -> Result<i64> {
        let simplices = self.simplices(complex)?;
        Ok(closure_euler_char(simplices))
    }

    fn toggle(&mut self, i: usize) {
        if !self.support.remove(&i) {
            self.support.insert(i);
        }
    }

    fn with_support(&self, support: BTreeSet<usize>) -> Chain {
        Chain { support, ..self.clone() }
    }

    fn check_compatible(&self, other: &Chain) -> Result<()> {
        if self.complex != other.complex {
            Err(Error::DimensionMismatch(format!(
                "chains of different complexes: {}, {}", self.complex, other.complex
            )))
        } else if self.dim != other.dim {
            Err(Error::DimensionMismatch(format!(
                "chains of dimension {} and {}", self.dim, other.dim
            )))
        } else if self.rank != other.rank {
            Err(Error::DimensionMismatch(format!(
                "chains in C_{} of rank {} and {}", self.dim, self.rank, other.rank
            )))
        } else {
            Ok(())
        }
    }

    fn group_in<'a>(&self, complex: &'a SimplicialComplex) -> Result<&'a ChainGroup> {
        if self.complex != complex.id() {
            return Err(Error::DimensionMismatch(format!(
                "chain of {} used with {}", self.complex, complex.id()
            )))
        }
        complex.chain_group(self.dim).ok_or(
            Error::IndexOutOfRange { index: self.dim, len: complex.num_groups() }
        )
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0")
        }
        write!(f, "{}", self.support.iter().map(|i| format!("e{i}")).join(" + "))
    }
}

// alternating count of every face of the given simplices.
pub(crate) fn closure_euler_char<'a, I>(simplices: I) -> i64
where I: IntoIterator<Item = &'a Simplex> {
    let faces: AHashSet<Simplex> = simplices.into_iter().flat_map(|s| s.closure()).collect();
    faces.iter().map(|s|
        if s.dim() % 2 == 0 { 1 } else { -1 }
    ).sum()
}
