mod f2;
pub use f2::*;
