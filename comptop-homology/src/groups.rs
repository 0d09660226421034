use log::debug;
use comptop_matrix::dense::{Mat, MatType};

use crate::{BoundaryMap, Chain, ChainGroup, Result};

/// Z_p = ker ∂_p. The basis consists of the last `zp()` columns of V.
#[derive(Clone, Debug)]
pub struct CycleGroup {
    dim: usize,
    basis: Vec<Chain>
}

impl CycleGroup {
    pub(crate) fn new(group: &ChainGroup, d: &BoundaryMap) -> Result<Self> {
        let v = d.v();
        let (l, n) = (d.diag_len(), v.cols());

        let basis = (l..n).map(|j|
            Chain::from_vector(group, &v.col_vec(j))
        ).collect::<Result<_>>()?;

        Ok(Self { dim: group.dim(), basis })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn rank(&self) -> usize {
        self.basis.len()
    }

    pub fn basis(&self) -> &[Chain] {
        &self.basis
    }
}

/// B_p = im ∂_{p+1}. The basis consists of the first `rank()` columns of
/// U⁻¹ of ∂_{p+1}.
#[derive(Clone, Debug)]
pub struct BoundaryGroup {
    dim: usize,
    basis: Vec<Chain>
}

impl BoundaryGroup {
    /// `d` is ∂_{p+1}.
    pub(crate) fn new(group: &ChainGroup, d: &BoundaryMap) -> Result<Self> {
        let ui = d.u_inv()?;
        let l = d.diag_len();

        let basis = (0..l).map(|j|
            Chain::from_vector(group, &ui.col_vec(j))
        ).collect::<Result<_>>()?;

        Ok(Self { dim: group.dim(), basis })
    }

    /// For the top dimension, where no ∂_{p+1} exists: the image of the
    /// rank-1 map whose matrix is a single all-ones column.
    pub(crate) fn top(group: &ChainGroup) -> Result<Self> {
        debug!("B_{}: top dimension", group.dim());
        let d = BoundaryMap::new(group.dim() + 1, Mat::ones((group.rank(), 1)));
        Self::new(group, &d)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn rank(&self) -> usize {
        self.basis.len()
    }

    pub fn basis(&self) -> &[Chain] {
        &self.basis
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use crate::SimplicialComplex;
    use super::*;

    #[test]
    fn cycles_of_triangle() {
        let c = SimplicialComplex::from_bases([[0, 1], [0, 2], [1, 2]]);
        let z = c.cycle_group(1).unwrap();

        assert_eq!(z.dim(), 1);
        assert_eq!(z.rank(), 1);
        assert_eq!(z.basis()[0].indices().collect_vec(), vec![0, 1, 2]);
        assert!(z.basis()[0].boundary(&c).unwrap().is_zero());
    }

    #[test]
    fn boundaries_of_triangle() {
        let c = SimplicialComplex::from_bases([[0, 1, 2]]);
        let b = c.boundary_group(1).unwrap();

        assert_eq!(b.rank(), 1);
        assert_eq!(b.basis()[0].indices().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn boundaries_of_vertices() {
        let c = SimplicialComplex::from_bases([[0, 1], [1, 2]]);
        let b = c.boundary_group(0).unwrap();
        let c0 = c.chain_group(0).unwrap();

        assert_eq!(b.rank(), 2);
        for x in b.basis() {
            assert_eq!(x.len() % 2, 0);
            assert_eq!(x.rank(), c0.rank());
        }
    }

    #[test]
    fn top() {
        let c = SimplicialComplex::from_bases([[0, 1, 2], [1, 2, 3]]);
        let c2 = c.chain_group(2).unwrap();
        let b = BoundaryGroup::top(c2).unwrap();

        assert_eq!(b.rank(), 1);
        assert_eq!(b.basis()[0].indices().collect_vec(), vec![0, 1]);
        assert_eq!(b.basis()[0].vector(), Mat::ones((2, 1)).col_vec(0));
    }
}
