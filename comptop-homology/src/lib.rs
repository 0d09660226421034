mod error;
mod simplex;
mod simplicial_set;
mod chain_group;
mod chain;
mod complex;
mod boundary_map;
mod groups;
mod homology;
mod euler;

pub use error::*;
pub use simplex::*;
pub use simplicial_set::*;
pub use chain_group::*;
pub use chain::*;
pub use complex::*;
pub use boundary_map::*;
pub use groups::*;
pub use homology::*;

pub mod spaces;
pub mod obj;
pub mod utils;
