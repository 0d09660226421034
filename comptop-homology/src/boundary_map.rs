use log::info;
use comptop::{Memo, MemoState, F2};
use comptop_matrix::dense::{Mat, MatType};
use comptop_matrix::dense::snf::{snf, SnfResult};

use crate::{Error, Result};

/// The boundary map ∂_p : C_p -> C_{p-1} as an m×n matrix over GF(2),
/// with its Smith normal form U·∂·V = S computed on first use.
#[derive(Debug)]
pub struct BoundaryMap {
    dim: usize,
    mat: Mat<F2>,
    snf: Memo<SnfResult>,
    u_inv: Memo<Result<Mat<F2>>>,
}

impl BoundaryMap {
    pub fn new(dim: usize, mat: Mat<F2>) -> Self {
        Self {
            dim,
            mat,
            snf: Memo::new(),
            u_inv: Memo::new(),
        }
    }

    /// The augmentation C_0 -> GF(2), sending every vertex to 1.
    pub fn augmentation(rank: usize) -> Self {
        Self::new(0, Mat::ones((1, rank)))
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn shape(&self) -> (usize, usize) {
        self.mat.shape()
    }

    pub fn boundary_matrix(&self) -> &Mat<F2> {
        &self.mat
    }

    pub fn reduction_state(&self) -> MemoState {
        self.snf.state()
    }

    fn snf_result(&self) -> &SnfResult {
        self.snf.get_or_init(|| {
            info!("reduce ∂_{}: {:?}", self.dim, self.mat.shape());
            snf(&self.mat)
        })
    }

    pub fn smith_normal(&self) -> &Mat<F2> {
        self.snf_result().result()
    }

    pub fn u(&self) -> &Mat<F2> {
        self.snf_result().u()
    }

    pub fn v(&self) -> &Mat<F2> {
        self.snf_result().v()
    }

    /// U⁻¹ over GF(2). Its first `rank()` columns span the image of ∂.
    pub fn u_inv(&self) -> Result<&Mat<F2>> {
        self.u_inv.get_or_init(|| {
            let u = self.u();
            u.inv().ok_or(Error::SingularMatrix(u.rows()))
        }).as_ref().map_err(|e| e.clone())
    }

    /// The number of leading 1s on the diagonal of the Smith normal form,
    /// i.e. the rank of ∂ over GF(2).
    pub fn diag_len(&self) -> usize {
        self.snf_result().rank()
    }

    pub fn rank(&self) -> usize {
        self.diag_len()
    }

    /// The rank of the kernel: n - rank.
    pub fn zp(&self) -> usize {
        self.mat.cols() - self.diag_len()
    }

    /// The rank of the image in C_{p-1}.
    pub fn bp_low(&self) -> usize {
        self.diag_len()
    }
}

impl std::fmt::Display for BoundaryMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (m, n) = self.shape();
        write!(f, "∂_{}: {n} -> {m}", self.dim)
    }
}
