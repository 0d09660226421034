use std::hash::Hash;
use num_traits::One;
use comptop::{IndexList, F2};
use comptop_matrix::dense::Mat;

/// The matrix of a map `from -> to` over GF(2): column `j` holds the
/// image of `from[j]`, given as the list of elements of `to` it hits.
/// Elements hit an even number of times cancel.
///
/// Panics if `f` returns an element that is not in `to`.
pub fn make_matrix<X, Y, F>(from: &IndexList<X>, to: &IndexList<Y>, f: F) -> Mat<F2>
where
    X: Eq + Hash,
    Y: Eq + Hash,
    F: Fn(&X) -> Vec<Y>
{
    let (m, n) = (to.len(), from.len());
    let mut a = Mat::zero((m, n));

    for (j, x) in from.iter().enumerate() {
        for y in f(x) {
            let Some(i) = to.index_of(&y) else {
                panic!("image of column {j} is not in the target basis.")
            };
            a[(i, j)] += F2::one();
        }
    }

    a
}

/// The 0/1 matrix with `(i, j) = 1` iff `has_face(from[j], to[i])`.
pub fn make_matrix_by<X, Y, F>(from: &IndexList<X>, to: &IndexList<Y>, has_face: F) -> Mat<F2>
where
    X: Eq + Hash,
    Y: Eq + Hash,
    F: Fn(&X, &Y) -> bool
{
    let (m, n) = (to.len(), from.len());
    let data = to.iter().flat_map(|y|
        from.iter().map(|x| F2::new(has_face(x, y))).collect::<Vec<_>>()
    ).collect::<Vec<_>>();

    Mat::from_data((m, n), data)
}

#[cfg(test)]
mod tests {
    use comptop_matrix::dense::MatType;
    use crate::Simplex;
    use super::*;

    fn tetrahedron() -> (IndexList<Simplex>, IndexList<Simplex>) {
        let c1 = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]].into_iter().map(Simplex::new).collect();
        let c2 = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]].into_iter().map(Simplex::new).collect();
        (c1, c2)
    }

    #[test]
    fn by_faces() {
        let (c1, c2) = tetrahedron();
        let d = make_matrix(&c2, &c1, |s| s.faces());

        assert_eq!(d.shape(), (6, 4));
        assert_eq!(d, Mat::from_bits((6, 4), [
            1, 1, 0, 0,
            1, 0, 1, 0,
            0, 1, 1, 0,
            1, 0, 0, 1,
            0, 1, 0, 1,
            0, 0, 1, 1,
        ]));
    }

    #[test]
    fn by_predicate() {
        let (c1, c2) = tetrahedron();
        let d = make_matrix_by(&c2, &c1, |s, t| s.has_face(t));
        let e = make_matrix(&c2, &c1, |s| s.faces());
        assert_eq!(d, e);
    }

    #[test]
    fn cancel() {
        let from: IndexList<usize> = [0].into_iter().collect();
        let to: IndexList<usize> = [0, 1].into_iter().collect();
        let d = make_matrix(&from, &to, |_| vec![0, 1, 0]);
        assert_eq!(d, Mat::from_bits((2, 1), [0, 1]));
    }

    #[test]
    fn empty() {
        let from = IndexList::<usize>::new();
        let to: IndexList<usize> = [0, 1].into_iter().collect();
        let d = make_matrix(&from, &to, |_| vec![]);
        assert_eq!(d.shape(), (2, 0));
    }
}
