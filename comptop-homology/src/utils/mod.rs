mod matrix;
mod search;

pub use matrix::*;
pub use search::*;
