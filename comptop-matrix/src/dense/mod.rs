mod mat;
mod elim;
pub mod snf;

pub use mat::*;
