use itertools::Itertools;
use derive_more::Display;
use comptop::combi::combi;

/// An abstract simplex: a non-empty set of vertex labels, kept sorted.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Simplex {
    vertices: Vec<usize>
}

impl Simplex {
    /// Panics if `vertices` is empty.
    pub fn new<I>(vertices: I) -> Self
    where I: IntoIterator<Item = usize> {
        let mut vertices = vertices.into_iter().collect_vec();
        vertices.sort_unstable();
        vertices.dedup();

        assert!(!vertices.is_empty(), "a simplex needs at least one vertex.");

        Self { vertices }
    }

    pub fn dim(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// The codimension-1 faces, obtained by dropping one vertex at a time.
    pub fn faces(&self) -> Vec<Simplex> {
        if self.dim() == 0 {
            return vec![]
        }
        let n = self.vertices.len();
        (0..n).map(|i| {
            let vertices = self.vertices.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, &v)| v).collect();
            Simplex { vertices }
        }).collect()
    }

    /// Faces of dimension `d`, in lexicographic order.
    pub fn faces_of_dim(&self, d: usize) -> impl Iterator<Item = Simplex> + '_ {
        let n = self.vertices.len();
        let r = if d < n { d + 1 } else { n + 1 };
        combi(n, r).map(move |c| {
            let vertices = c.into_iter().map(|i| self.vertices[i]).collect();
            Simplex { vertices }
        })
    }

    /// Every face including `self`, lower dimensions first.
    pub fn closure(&self) -> impl Iterator<Item = Simplex> + '_ {
        (0..=self.dim()).flat_map(move |d| self.faces_of_dim(d))
    }

    /// Whether `f` is a codimension-1 face of `self`.
    pub fn has_face(&self, f: &Simplex) -> bool {
        f.dim() + 1 == self.dim() && f.is_subset(self)
    }

    pub fn is_subset(&self, other: &Simplex) -> bool {
        self.vertices.iter().all(|&v| other.contains_vertex(v))
    }

    /// Common vertices, possibly none.
    pub fn intersection(&self, other: &Simplex) -> Vec<usize> {
        self.vertices.iter().filter(|&&v| other.contains_vertex(v)).cloned().collect()
    }
}

impl std::fmt::Display for Simplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.vertices.iter().join(", "))
    }
}

/// Locates a simplex inside its complex: its dimension and its index in
/// the chain group of that dimension.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display("{dim}:{index}")]
pub struct SimplexKey {
    dim: usize,
    index: usize
}

impl SimplexKey {
    pub fn new(dim: usize, index: usize) -> Self {
        Self { dim, index }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
