use log::debug;

use crate::SimplicialComplex;

// Euler calculus over a complex, for integer-valued functions on the
// vertex labels.
impl SimplicialComplex {
    /// Simplices on which `f` is constantly `s`.
    pub fn level_set<F>(&self, f: F, s: i64) -> SimplicialComplex
    where F: Fn(usize) -> i64 {
        self.subcomplex(|x| x.vertices().iter().all(|&v| f(v) == s))
    }

    /// Simplices on which `f > s`.
    pub fn upper_excursion_set<F>(&self, f: F, s: i64) -> SimplicialComplex
    where F: Fn(usize) -> i64 {
        self.subcomplex(|x| x.vertices().iter().all(|&v| f(v) > s))
    }

    /// Simplices on which `f < s`.
    pub fn lower_excursion_set<F>(&self, f: F, s: i64) -> SimplicialComplex
    where F: Fn(usize) -> i64 {
        self.subcomplex(|x| x.vertices().iter().all(|&v| f(v) < s))
    }

    /// The integral of `f` with respect to the Euler characteristic,
    /// for `f` taking values in `a..=b`:
    ///
    /// ∫ f dχ = Σ_{s=a}^{b} χ({f > s})
    pub fn euler_integral<F>(&self, a: i64, b: i64, f: F) -> i64
    where F: Fn(usize) -> i64 {
        let res = (a..=b).map(|s|
            self.upper_excursion_set(&f, s).euler_char()
        ).sum();

        debug!("euler integral over [{a}, {b}]: {res}");

        res
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    // a triangulated strip of a sensor grid:
    //
    //  0----1----2
    //   \ /   \ /
    //    3-----4
    //   / \   / \
    //  5----6----7
    //   \ /   \ /
    //    8-----9
    //   / \   / \
    //  10---11---12
    fn grid() -> SimplicialComplex {
        SimplicialComplex::from_bases([
            [0, 1, 3], [1, 3, 4], [1, 2, 4],
            [3, 5, 6], [3, 4, 6], [4, 6, 7],
            [5, 6, 8], [6, 8, 9], [6, 7, 9],
            [8, 10, 11], [8, 9, 11], [9, 11, 12],
        ])
    }

    // heights:
    //
    //  1----3----1
    //   \ /   \ /
    //    2-----2
    //   / \   / \
    //  0----0----0
    //   \ /   \ /
    //    0-----1
    //   / \   / \
    //  0----1----1
    fn height() -> impl Fn(usize) -> i64 {
        let data: HashMap<usize, i64> = [
            (0, 1), (1, 3), (2, 1),
            (3, 2), (4, 2),
            (5, 0), (6, 0), (7, 0),
            (8, 0), (9, 1),
            (10, 0), (11, 1), (12, 1),
        ].into_iter().collect();
        move |v| data[&v]
    }

    #[test]
    fn level_set() {
        let c = grid();
        let l = c.level_set(height(), 2);

        assert_eq!(l.dim(), Some(1));
        assert_eq!(l.num_simplices(), 3);
        assert!(l.get_simplex([3, 4]).is_some());
    }

    #[test]
    fn excursion_sets() {
        let c = grid();
        let f = height();

        let u = c.upper_excursion_set(&f, 1);
        assert_eq!(u.simplices(0).count(), 3);
        assert_eq!(u.simplices(1).count(), 3);
        assert_eq!(u.simplices(2).count(), 1);
        assert_eq!(u.euler_char(), 1);

        let l = c.lower_excursion_set(&f, 1);
        assert_eq!(l.simplices(0).count(), 5);
        assert!(l.get_simplex([5, 6, 8]).is_some());
        assert!(l.get_simplex([0]).is_none());
    }

    #[test]
    fn euler_integral() {
        let c = grid();
        assert_eq!(c.euler_integral(0, 3, height()), 4);
    }

    #[test]
    fn euler_integral_of_indicator() {
        // the integral of an indicator function is the Euler characteristic of its support.
        let c = grid();
        let f = |v: usize| if v <= 4 { 1 } else { 0 };
        assert_eq!(c.euler_integral(0, 1, f), c.level_set(f, 1).euler_char());
    }
}
