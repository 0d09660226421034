mod combi;
pub use combi::*;
