pub mod smooth;

pub use smooth::{smooth_ring, IterativeSmoothing2D, SmoothingResult};
