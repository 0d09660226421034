use std::cmp::min;
use log::{debug, trace};
use num_traits::{One, Zero};
use comptop::F2;
use super::{Mat, MatType};

// Smith normal form over GF(2): U * A * V = S, where S has 1s on the
// first `rank` diagonal entries and 0s elsewhere. Pivots are chosen in
// row-major order inside the unreduced block, so the factors U and V
// are determined by the input.

pub fn snf(target: &Mat<F2>) -> SnfResult {
    let copy = target.clone();
    snf_in_place(copy)
}

pub fn snf_in_place(target: Mat<F2>) -> SnfResult {
    debug!("start snf: {:?}.", target.shape());
    trace!("\n{}", target);

    let mut calc = SnfCalc::new(target);

    calc.process();

    debug!("snf done.");
    trace!("\n{}", calc.target);

    calc.result()
}

#[derive(Clone, Debug)]
pub struct SnfResult {
    result: Mat<F2>,
    u: Mat<F2>,
    v: Mat<F2>
}

impl SnfResult {
    pub fn result(&self) -> &Mat<F2> {
        &self.result
    }

    pub fn u(&self) -> &Mat<F2> {
        &self.u
    }

    pub fn v(&self) -> &Mat<F2> {
        &self.v
    }

    pub fn destruct(self) -> (Mat<F2>, Mat<F2>, Mat<F2>) {
        (self.result, self.u, self.v)
    }

    /// The length of the diagonal block of 1s, i.e. the rank over GF(2).
    pub fn rank(&self) -> usize {
        let n = min(self.result.rows(), self.result.cols());
        for i in 0..n {
            if self.result[(i, i)].is_zero() {
                return i
            }
        }
        n
    }
}

#[derive(Debug)]
struct SnfCalc {
    target: Mat<F2>,
    u: Mat<F2>,
    v: Mat<F2>
}

impl SnfCalc {
    fn new(target: Mat<F2>) -> Self {
        let (m, n) = target.shape();
        let u = Mat::id(m);
        let v = Mat::id(n);
        SnfCalc { target, u, v }
    }

    fn result(self) -> SnfResult {
        SnfResult {
            result: self.target,
            u: self.u,
            v: self.v
        }
    }

    fn process(&mut self) {
        let (m, n) = self.target.shape();
        let r = min(m, n);
        let mut x = 0;

        while x < r && self.eliminate_step(x) {
            x += 1;
        }
    }

    fn eliminate_step(&mut self, x: usize) -> bool {
        let Some((i, j)) = self.select_pivot(x) else {
            // the remaining block is zero.
            return false
        };

        trace!("select-pivot: ({i}, {j})");

        if i > x {
            self.swap_rows(x, i);
        }

        if j > x {
            self.swap_cols(x, j);
        }

        self.eliminate_at(x);

        true
    }

    // first 1 in row-major order within rows >= x, cols >= x.
    fn select_pivot(&self, x: usize) -> Option<(usize, usize)> {
        let (m, n) = self.target.shape();
        (x..m).find_map(|i|
            (x..n).find(|&j| self.target[(i, j)].is_one()).map(|j| (i, j))
        )
    }

    fn eliminate_at(&mut self, x: usize) {
        let (m, n) = self.target.shape();

        for i in x + 1 .. m {
            if self.target[(i, x)].is_one() {
                self.add_row_to(x, i);
            }
        }

        for j in x + 1 .. n {
            if self.target[(x, j)].is_one() {
                self.add_col_to(x, j);
            }
        }
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        self.target.swap_rows(i, j);
        self.u.swap_rows(i, j);

        trace!("swap-rows: ({i}, {j})\n{}", self.target);
    }

    fn swap_cols(&mut self, i: usize, j: usize) {
        self.target.swap_cols(i, j);
        self.v.swap_cols(i, j);

        trace!("swap-cols: ({i}, {j})\n{}", self.target);
    }

    // row j <- row j + row i, i.e. U <- E * U.
    fn add_row_to(&mut self, i: usize, j: usize) {
        self.target.add_row_to(i, j);
        self.u.add_row_to(i, j);

        trace!("add-row: {i} to {j}\n{}", self.target);
    }

    // col j <- col j + col i, i.e. V <- V * E.
    fn add_col_to(&mut self, i: usize, j: usize) {
        self.target.add_col_to(i, j);
        self.v.add_col_to(i, j);

        trace!("add-col: {i} to {j}\n{}", self.target);
    }
}
