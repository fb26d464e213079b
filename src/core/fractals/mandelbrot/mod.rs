pub mod algorithm;
pub mod colour_map;

pub use algorithm::MandelbrotAlgorithm;
pub use colour_map::BlueWhiteGradient;
