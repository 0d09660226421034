use itertools::Itertools;
use log::{debug, trace};
use comptop::combi::{binom, combi};
use comptop_matrix::dense::Mat;

use crate::Chain;

/// Extends a basis of boundaries to a basis of cycles by picking
/// `cycles.len() - boundaries.len()` elements of a fixed cycle basis.
///
/// Candidates are the subsets of the cycle basis in lexicographic order
/// of their indices; a candidate is accepted when the boundaries
/// together with the chosen cycles are linearly independent over GF(2).
pub struct BasisSearch<'a> {
    rows: usize,
    boundaries: &'a [Chain],
    cycles: &'a [Chain],
}

impl<'a> BasisSearch<'a> {
    /// `rows` is the rank of the chain group all the chains live in.
    pub fn new(rows: usize, boundaries: &'a [Chain], cycles: &'a [Chain]) -> Self {
        Self { rows, boundaries, cycles }
    }

    /// The number of cycles to pick.
    pub fn size(&self) -> usize {
        self.cycles.len().saturating_sub(self.boundaries.len())
    }

    pub fn is_independent(&self, combo: &[usize]) -> bool {
        let chosen = combo.iter().map(|&i| &self.cycles[i]);
        let cols = self.boundaries.iter().chain(chosen).map(|c| c.vector());
        Mat::from_cols(self.rows, cols).is_col_independent()
    }

    /// Sum of the Hamming weights, plus the number of basis elements
    /// shared by two or more of the chosen cycles.
    pub fn weight(&self, combo: &[usize]) -> usize {
        let cols = combo.iter().map(|&i| self.cycles[i].vector());
        let hamming = Mat::from_cols(self.rows, cols).weight();
        let shared = combo.iter()
            .flat_map(|&i| self.cycles[i].indices())
            .counts()
            .values()
            .filter(|&&c| c > 1)
            .count();
        hamming + shared
    }

    /// The first independent candidate.
    pub fn first(&self) -> Option<Vec<usize>> {
        let k = self.size();
        if k == 0 {
            return Some(vec![])
        }

        let n = self.cycles.len();
        debug!("search {k} of {n} cycles ({} candidates)", binom(n, k));

        combi(n, k).find(|c| self.is_independent(c))
    }

    /// The independent candidate of least weight; the earliest one wins ties.
    pub fn minimal(&self) -> Option<Vec<usize>> {
        let k = self.size();
        if k == 0 {
            return Some(vec![])
        }

        let n = self.cycles.len();
        debug!("search minimal {k} of {n} cycles ({} candidates)", binom(n, k));

        let mut min: Option<(Vec<usize>, usize)> = None;

        for c in combi(n, k) {
            let w = self.weight(&c);
            if min.as_ref().is_some_and(|(_, w0)| w >= *w0) {
                continue
            }
            if self.is_independent(&c) {
                trace!("candidate {:?}, weight: {w}", c);
                min = Some((c, w));
            }
        }

        min.map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use crate::SimplicialComplex;
    use super::*;

    // two triangles sharing the edge [1, 2]; no 2-simplices.
    fn kite() -> SimplicialComplex {
        SimplicialComplex::from_bases([[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]])
    }

    fn chains(c: &SimplicialComplex, supports: &[&[usize]]) -> Vec<Chain> {
        let c1 = c.chain_group(1).unwrap();
        supports.iter().map(|s|
            Chain::from_indices(c1, s.iter().cloned()).unwrap()
        ).collect()
    }

    #[test]
    fn first() {
        let c = kite();
        // 01, 02, 12, 13, 23
        let cycles = chains(&c, &[&[0, 1, 2], &[0, 1, 3, 4], &[2, 3, 4]]);
        let search = BasisSearch::new(5, &[], &cycles);

        assert_eq!(search.size(), 3);
        assert_eq!(search.first(), None);

        let cycles = &cycles[..2];
        let search = BasisSearch::new(5, &[], cycles);
        assert_eq!(search.first(), Some(vec![0, 1]));
    }

    #[test]
    fn with_boundaries() {
        let c = kite();
        let boundaries = chains(&c, &[&[0, 1, 2]]);
        let cycles = chains(&c, &[&[0, 1, 2], &[0, 1, 3, 4]]);
        let search = BasisSearch::new(5, &boundaries, &cycles);

        assert_eq!(search.size(), 1);
        assert!(!search.is_independent(&[0]));
        assert!( search.is_independent(&[1]));
        assert_eq!(search.first(), Some(vec![1]));
    }

    #[test]
    fn weight() {
        let c = kite();
        let cycles = chains(&c, &[&[0, 1, 2], &[0, 1, 3, 4], &[2, 3, 4]]);
        let search = BasisSearch::new(5, &[], &cycles);

        assert_eq!(search.weight(&[0]), 3);
        assert_eq!(search.weight(&[0, 2]), 3 + 3 + 1);
        assert_eq!(search.weight(&[0, 1]), 3 + 4 + 2);
        assert_eq!(search.weight(&[1, 2]), 4 + 3 + 2);
    }

    #[test]
    fn minimal() {
        let c = kite();
        let extra = chains(&c, &[&[0]]);
        let cycles = chains(&c, &[&[0, 1, 3, 4], &[0, 1, 2], &[2, 3, 4]]);
        let search = BasisSearch::new(5, &extra, &cycles);

        // {0, 1} and {0, 2} both weigh 9, {1, 2} weighs 7.
        assert_eq!(search.size(), 2);
        assert_eq!(search.first(), Some(vec![0, 1]));
        assert_eq!(search.minimal(), Some(vec![1, 2]));
    }

    #[test]
    fn minimal_tie() {
        let c = kite();
        let extra = chains(&c, &[&[0]]);
        let cycles = chains(&c, &[&[0, 1, 2], &[2, 3, 4]]);
        let search = BasisSearch::new(5, &extra, &cycles);

        assert_eq!(search.weight(&[0]), search.weight(&[1]));
        assert_eq!(search.minimal(), Some(vec![0]));
    }

    #[test]
    fn minimal_none() {
        let c = kite();
        let cycles = chains(&c, &[&[0, 1, 3, 4], &[0, 1, 2], &[2, 3, 4]]);
        let search = BasisSearch::new(5, &[], &cycles);
        assert_eq!(search.minimal(), None);
    }

    #[test]
    fn nothing_to_pick() {
        let c = kite();
        let boundaries = chains(&c, &[&[0, 1, 2]]);
        let cycles = chains(&c, &[&[0, 1, 2]]);
        let search = BasisSearch::new(5, &boundaries, &cycles);

        assert_eq!(search.size(), 0);
        assert_eq!(search.first(), Some(vec![]));
        assert_eq!(search.minimal(), Some(vec![]));
    }
}
