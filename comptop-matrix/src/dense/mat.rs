use std::fmt::Display;
use std::ops::{Index, IndexMut, Mul, MulAssign, Range};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use nalgebra::{DMatrix, Scalar};
use num_traits::{One, ToPrimitive, Zero};
use comptop::F2;

pub trait MatType {
    fn shape(&self) -> (usize, usize);
    fn rows(&self) -> usize { self.shape().0 }
    fn cols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mat<R> {
    inner: DMatrix<R>
}

impl<R> MatType for Mat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R> {
    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }

    pub fn into_inner(self) -> DMatrix<R> {
        self.inner
    }

    // column-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let m = self.rows();
        self.inner.iter().enumerate().map(move |(i, a)|
            (i % m, i / m, a)
        )
    }
}

impl<R> Mat<R>
where R: Scalar {
    /// `data` is read in row-major order.
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    pub fn from_cols<I>(rows: usize, cols: I) -> Self
    where I: IntoIterator<Item = Vec<R>> {
        let cols = cols.into_iter().collect_vec();
        let n = cols.len();
        for c in cols.iter() {
            assert_eq!(c.len(), rows);
        }
        let data = cols.into_iter().flatten();
        DMatrix::from_iterator(rows, n, data).into()
    }

    pub fn zero(shape: (usize, usize)) -> Self
    where R: Zero {
        let inner = DMatrix::zeros(shape.0, shape.1);
        Self::from(inner)
    }

    pub fn is_zero(&self) -> bool
    where R: Zero {
        self.iter().all(|e| e.2.is_zero())
    }

    pub fn id(size: usize) -> Self
    where R: Zero + One {
        let inner = DMatrix::identity(size, size);
        Self::from(inner)
    }

    pub fn is_id(&self) -> bool
    where R: Zero + One {
        self.is_square() && self.iter().all(|(i, j, a)|
            i == j && a.is_one() ||
            i != j && a.is_zero()
        )
    }

    pub fn submat(&self, rows: Range<usize>, cols: Range<usize>) -> Mat<R> {
        let (i0, i1) = (rows.start, rows.end);
        let (j0, j1) = (cols.start, cols.end);

        assert!(i0 <= i1 && i1 <= self.rows());
        assert!(j0 <= j1 && j1 <= self.cols());

        let slice = self.inner.view((i0, j0), (i1 - i0, j1 - j0));
        Self::from(slice.clone_owned())
    }

    pub fn submat_rows(&self, rows: Range<usize>) -> Mat<R> {
        let n = self.cols();
        self.submat(rows, 0 .. n)
    }

    pub fn submat_cols(&self, cols: Range<usize>) -> Mat<R> {
        let m = self.rows();
        self.submat(0 .. m, cols)
    }

    pub fn row_vec(&self, i: usize) -> Vec<R> {
        self.inner.row(i).iter().cloned().collect()
    }

    pub fn col_vec(&self, j: usize) -> Vec<R> {
        self.inner.column(j).iter().cloned().collect()
    }

    pub fn set_col(&mut self, j: usize, data: &[R]) {
        assert_eq!(data.len(), self.rows());
        for (i, a) in data.iter().enumerate() {
            self.inner[(i, j)] = a.clone();
        }
    }

    pub fn transpose(&self) -> Mat<R> {
        Self::from(self.inner.transpose())
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.inner.swap_rows(i, j);
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) {
        self.inner.swap_columns(i, j);
    }
}

impl<R> From<DMatrix<R>> for Mat<R> {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}

impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    delegate! {
        to self.inner {
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R> {
    delegate! {
        to self.inner {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output;
        }
    }
}

impl<R> Default for Mat<R>
where R: Scalar + Zero {
    fn default() -> Self {
        Self::zero((0, 0))
    }
}

impl<R> Display for Mat<R>
where R: Scalar + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (m, n) = self.shape();
        if m == 0 || n == 0 {
            return write!(f, "[{m}x{n}]")
        }
        let lines = (0..m).map(|i|
            (0..n).map(|j| self.inner[(i, j)].to_string()).join(" ")
        ).join("\n");
        f.write_str(&lines)
    }
}

// GF(2) arithmetic.
impl Mat<F2> {
    /// Builds a GF(2)-matrix from integer data (row-major), reducing each entry mod 2.
    pub fn from_bits<I, T>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = T>, T: ToPrimitive {
        Self::from_data(shape, data.into_iter().map(F2::from))
    }

    pub fn ones(shape: (usize, usize)) -> Self {
        Self::from(DMatrix::from_element(shape.0, shape.1, F2::one()))
    }

    /// row j <- row j + row i
    pub fn add_row_to(&mut self, i: usize, j: usize) {
        assert_ne!(i, j);
        for k in 0..self.cols() {
            let a = self.inner[(i, k)];
            self.inner[(j, k)] += a;
        }
    }

    /// col j <- col j + col i
    pub fn add_col_to(&mut self, i: usize, j: usize) {
        assert_ne!(i, j);
        for k in 0..self.rows() {
            let a = self.inner[(k, i)];
            self.inner[(k, j)] += a;
        }
    }

    /// Number of nonzero entries.
    pub fn weight(&self) -> usize {
        self.inner.iter().filter(|a| a.is_one()).count()
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b Mat<F2>> for &'a Mat<F2> {
    type Output = Mat<F2>;
    fn mul(self, rhs: &'b Mat<F2>) -> Self::Output {
        let (l, m) = self.shape();
        let (m2, n) = rhs.shape();
        assert_eq!(m, m2, "cannot multiply {l}x{m} by {m2}x{n}.");

        let mut res = Mat::zero((l, n));
        for i in 0..l {
            for k in 0..m {
                if self[(i, k)].is_zero() { continue }
                for j in 0..n {
                    let b = rhs[(k, j)];
                    res[(i, j)] += b;
                }
            }
        }
        res
    }
}
