use log::trace;
use num_traits::{One, Zero};
use comptop::F2;
use super::{Mat, MatType};

// Gauss-Jordan elimination over GF(2).
impl Mat<F2> {
    /// The reduced row echelon form, together with the pivot columns.
    pub fn rref(&self) -> (Mat<F2>, Vec<usize>) {
        let mut a = self.clone();
        let pivots = rref_in_place(&mut a, None);
        (a, pivots)
    }

    pub fn rank(&self) -> usize {
        self.rref().1.len()
    }

    pub fn is_col_independent(&self) -> bool {
        self.rank() == self.cols()
    }

    /// The inverse over GF(2), or `None` if the matrix is singular.
    pub fn inv(&self) -> Option<Mat<F2>> {
        assert!(self.is_square(), "cannot invert a non-square matrix: {:?}.", self.shape());

        let n = self.rows();
        let mut a = self.clone();
        let mut b = Mat::id(n);
        let pivots = rref_in_place(&mut a, Some(&mut b));

        if pivots.len() == n {
            Some(b)
        } else {
            trace!("singular: rank {} < {n}", pivots.len());
            None
        }
    }
}

// Row operations applied to `a` are replayed on `b`.
fn rref_in_place(a: &mut Mat<F2>, mut b: Option<&mut Mat<F2>>) -> Vec<usize> {
    let (m, n) = a.shape();
    let mut pivots = vec![];
    let mut r = 0;

    for j in 0..n {
        if r >= m { break }

        let Some(i) = (r..m).find(|&i| a[(i, j)].is_one()) else {
            continue
        };

        if i != r {
            a.swap_rows(i, r);
            if let Some(b) = b.as_deref_mut() {
                b.swap_rows(i, r);
            }
        }

        for k in 0..m {
            if k == r || a[(k, j)].is_zero() { continue }
            a.add_row_to(r, k);
            if let Some(b) = b.as_deref_mut() {
                b.add_row_to(r, k);
            }
        }

        pivots.push(j);
        r += 1;
    }

    pivots
}
