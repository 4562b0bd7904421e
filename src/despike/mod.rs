pub mod cutter;
pub mod geometry;

pub use cutter::{Correction, SpikeCutter};
