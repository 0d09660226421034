use derive_more::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Chains, vectors or matrices that do not live in the same chain group.
    #[display("dimension mismatch: {_0}")]
    DimensionMismatch(String),

    /// A change-of-basis factor failed to invert.
    #[display("{_0}x{_0} matrix is not invertible over GF(2)")]
    SingularMatrix(usize),

    /// No independent set of cycles completes the boundary basis.
    #[display("no {k} cycles among {cycles} complete the boundary basis in dimension {dim}")]
    InconsistentRank { dim: usize, cycles: usize, k: usize },

    #[display("index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl std::error::Error for Error {}
