use log::{debug, info};
use comptop::Memo;

use crate::{BoundaryGroup, BoundaryMap, Chain, ChainGroup, CycleGroup, Error, Result, SimplicialComplex};
use crate::utils::{make_matrix, BasisSearch};

/// H_p = Z_p / B_p, represented by cycles that complete a basis of B_p
/// to a basis of Z_p.
#[derive(Debug)]
pub struct HomologyGroup {
    dim: usize,
    rows: usize,
    cycles: Vec<Chain>,
    boundaries: Vec<Chain>,
    basis: Memo<Result<Vec<Chain>>>,
    minimal_basis: Memo<Result<Vec<Chain>>>,
}

impl HomologyGroup {
    pub(crate) fn new(group: &ChainGroup, z: &CycleGroup, b: &BoundaryGroup) -> Self {
        Self::from_bases(group.dim(), group.rank(), z.basis().to_vec(), b.basis().to_vec())
    }

    /// `cycles` and `boundaries` are bases of Z_p and B_p, as chains of
    /// a chain group of rank `rows`.
    pub(crate) fn from_bases(dim: usize, rows: usize, cycles: Vec<Chain>, boundaries: Vec<Chain>) -> Self {
        Self {
            dim,
            rows,
            cycles,
            boundaries,
            basis: Memo::new(),
            minimal_basis: Memo::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// rank Z_p - rank B_p.
    pub fn rank(&self) -> usize {
        self.cycles.len().saturating_sub(self.boundaries.len())
    }

    pub fn is_zero(&self) -> bool {
        self.rank() == 0
    }

    pub fn cycle_basis(&self) -> &[Chain] {
        &self.cycles
    }

    pub fn boundary_basis(&self) -> &[Chain] {
        &self.boundaries
    }

    /// The first subset of the cycle basis, in lexicographic order, that
    /// extends the boundary basis.
    pub fn basis(&self) -> Result<&[Chain]> {
        self.basis.get_or_init(|| {
            info!("H_{}: search basis (rank: {})", self.dim, self.rank());
            let found = self.search().first();
            self.collect(found)
        }).as_deref().map_err(|e| e.clone())
    }

    /// Like `basis`, but minimizing the total Hamming weight plus the
    /// overlap between the chosen cycles.
    pub fn minimal_basis(&self) -> Result<&[Chain]> {
        self.minimal_basis.get_or_init(|| {
            info!("H_{}: search minimal basis (rank: {})", self.dim, self.rank());
            let found = self.search().minimal();
            self.collect(found)
        }).as_deref().map_err(|e| e.clone())
    }

    fn search(&self) -> BasisSearch<'_> {
        BasisSearch::new(self.rows, &self.boundaries, &self.cycles)
    }

    fn collect(&self, found: Option<Vec<usize>>) -> Result<Vec<Chain>> {
        let Some(indices) = found else {
            return Err(Error::InconsistentRank {
                dim: self.dim,
                cycles: self.cycles.len(),
                k: self.rank()
            })
        };
        debug!("H_{}: picked {:?}", self.dim, indices);
        Ok(indices.into_iter().map(|i| self.cycles[i].clone()).collect())
    }
}

impl std::fmt::Display for HomologyGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank() {
            0 => write!(f, "0"),
            1 => write!(f, "Z/2"),
            r => write!(f, "(Z/2)^{r}")
        }
    }
}

impl SimplicialComplex {
    fn group_at(&self, p: usize) -> Result<&ChainGroup> {
        self.chain_group(p).ok_or(Error::IndexOutOfRange { index: p, len: self.num_groups() })
    }

    /// ∂_p : C_p -> C_{p-1}. ∂_0 is the augmentation.
    pub fn boundary_map(&self, p: usize) -> Result<&BoundaryMap> {
        let group = self.group_at(p)?;
        let lower = if p > 0 { Some(self.group_at(p - 1)?) } else { None };

        Ok(group.d_map.get_or_init(|| match lower {
            Some(lower) => {
                let mat = make_matrix(group.elements_list(), lower.elements_list(), |s| s.faces());
                BoundaryMap::new(p, mat)
            },
            None => BoundaryMap::augmentation(group.rank())
        }))
    }

    pub fn cycle_group(&self, p: usize) -> Result<&CycleGroup> {
        let group = self.group_at(p)?;
        let d = self.boundary_map(p)?;
        group.cycles.get_or_init(||
            CycleGroup::new(group, d)
        ).as_ref().map_err(|e| e.clone())
    }

    pub fn boundary_group(&self, p: usize) -> Result<&BoundaryGroup> {
        let group = self.group_at(p)?;
        group.boundaries.get_or_init(|| {
            if p + 1 < self.num_groups() {
                let d = self.boundary_map(p + 1)?;
                BoundaryGroup::new(group, d)
            } else {
                BoundaryGroup::top(group)
            }
        }).as_ref().map_err(|e| e.clone())
    }

    pub fn homology_group(&self, p: usize) -> Result<&HomologyGroup> {
        let group = self.group_at(p)?;
        group.homology.get_or_init(|| {
            let z = self.cycle_group(p)?;
            let b = self.boundary_group(p)?;
            Ok(HomologyGroup::new(group, z, b))
        }).as_ref().map_err(|e| e.clone())
    }

    /// dim Z_p(∂_p) - rank ∂_{p+1}, plus 1 at p = 0.
    pub fn betti_number(&self, p: usize) -> Result<usize> {
        let b = self.reduced_betti_number(p)?;
        Ok(if p == 0 { b + 1 } else { b })
    }

    /// dim Z_p(∂_p) - rank ∂_{p+1}, where ∂_0 is the augmentation.
    pub fn reduced_betti_number(&self, p: usize) -> Result<usize> {
        let z = self.boundary_map(p)?.zp();
        let b = if p + 1 < self.num_groups() {
            self.boundary_map(p + 1)?.rank()
        } else {
            0
        };
        Ok(z - b)
    }

    pub fn betti_numbers(&self) -> Result<Vec<usize>> {
        (0..self.num_groups()).map(|p| self.betti_number(p)).collect()
    }

    pub fn reduced_betti_numbers(&self) -> Result<Vec<usize>> {
        (0..self.num_groups()).map(|p| self.reduced_betti_number(p)).collect()
    }
}
