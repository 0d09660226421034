mod types;
mod misc;

pub use types::*;
pub use misc::*;

pub mod combi;
pub mod util;
