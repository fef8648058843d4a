pub mod math3d;
pub mod random;
pub mod utils;
