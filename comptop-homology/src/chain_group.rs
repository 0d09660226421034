use delegate::delegate;
use log::trace;
use comptop::{IndexList, Memo};

use crate::{BoundaryGroup, BoundaryMap, ComplexId, CycleGroup, HomologyGroup, Result, Simplex};

/// The chain group C_p of a complex: the GF(2)-vector space spanned by
/// its p-simplices. The position of a simplex in `elements` is its
/// basis index, i.e. its row or column in every boundary matrix.
#[derive(Debug)]
pub struct ChainGroup {
    complex: ComplexId,
    dim: usize,
    elements: IndexList<Simplex>,

    pub(crate) d_map: Memo<BoundaryMap>,
    pub(crate) cycles: Memo<Result<CycleGroup>>,
    pub(crate) boundaries: Memo<Result<BoundaryGroup>>,
    pub(crate) homology: Memo<Result<HomologyGroup>>,
}

impl ChainGroup {
    pub(crate) fn new(complex: ComplexId, dim: usize) -> Self {
        Self {
            complex,
            dim,
            elements: IndexList::new(),
            d_map: Memo::new(),
            cycles: Memo::new(),
            boundaries: Memo::new(),
            homology: Memo::new(),
        }
    }

    pub fn complex_id(&self) -> ComplexId {
        self.complex
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    delegate! {
        to self.elements {
            #[call(len)]
            pub fn rank(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn index_of(&self, s: &Simplex) -> Option<usize>;
            pub fn contains(&self, s: &Simplex) -> bool;
            #[call(get)]
            pub fn element(&self, i: usize) -> Option<&Simplex>;
        }
    }

    /// The basis, in index order.
    pub fn elements(&self) -> impl Iterator<Item = &Simplex> {
        self.elements.iter()
    }

    pub(crate) fn elements_list(&self) -> &IndexList<Simplex> {
        &self.elements
    }

    pub(crate) fn push(&mut self, s: Simplex) -> (usize, bool) {
        debug_assert_eq!(s.dim(), self.dim);
        self.elements.push(s)
    }

    // C_p itself changed: ∂_p gained a column, ∂_{p+1} gained a row.
    pub(crate) fn invalidate_all(&mut self) {
        trace!("invalidate all caches of C_{}", self.dim);
        self.d_map.invalidate();
        self.cycles.invalidate();
        self.boundaries.invalidate();
        self.homology.invalidate();
    }

    // C_{p-1} changed: ∂_p gained a row.
    pub(crate) fn invalidate_lower(&mut self) {
        trace!("invalidate ∂_{0}, Z_{0}, H_{0}", self.dim);
        self.d_map.invalidate();
        self.cycles.invalidate();
        self.homology.invalidate();
    }

    // C_{p+1} changed: ∂_{p+1} gained a column.
    pub(crate) fn invalidate_upper(&mut self) {
        trace!("invalidate B_{0}, H_{0}", self.dim);
        self.boundaries.invalidate();
        self.homology.invalidate();
    }
}

impl std::fmt::Display for ChainGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C_{} (rank: {})", self.dim, self.rank())
    }
}
