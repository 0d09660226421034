//! Small triangulated surfaces.

use crate::SimplicialComplex;

/// The 9-vertex, 18-triangle torus.
pub fn torus() -> SimplicialComplex {
    SimplicialComplex::from_bases([
        [0, 1, 3], [1, 3, 4], [1, 2, 4], [2, 4, 5], [0, 2, 5], [0, 3, 5],
        [3, 4, 6], [4, 6, 7], [4, 5, 7], [5, 7, 8], [3, 5, 8], [3, 6, 8],
        [0, 6, 7], [0, 1, 7], [1, 7, 8], [1, 2, 8], [2, 6, 8], [0, 2, 6],
    ])
}

/// A 6-vertex annulus.
pub fn annulus() -> SimplicialComplex {
    SimplicialComplex::from_bases([
        [0, 1, 2], [1, 2, 3], [2, 3, 4], [3, 4, 5], [0, 4, 5], [0, 1, 5],
    ])
}

/// A 6-vertex Möbius strip.
pub fn mobius_strip() -> SimplicialComplex {
    SimplicialComplex::from_bases([
        [0, 1, 2], [1, 2, 3], [2, 3, 4], [3, 4, 5], [1, 4, 5], [0, 1, 5],
    ])
}

/// The boundary of the 3-simplex.
pub fn sphere() -> SimplicialComplex {
    SimplicialComplex::from_bases([
        [0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        let t = torus();
        assert_eq!(t.chain_groups().map(|g| g.rank()).collect::<Vec<_>>(), vec![9, 27, 18]);
        assert_eq!(t.euler_char(), 0);

        let a = annulus();
        assert_eq!(a.chain_groups().map(|g| g.rank()).collect::<Vec<_>>(), vec![6, 12, 6]);

        let m = mobius_strip();
        assert_eq!(m.chain_groups().map(|g| g.rank()).collect::<Vec<_>>(), vec![6, 12, 6]);

        let s = sphere();
        assert_eq!(s.euler_char(), 2);
    }
}
