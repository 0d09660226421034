pub mod betti;
pub mod homology;
pub mod euler;
