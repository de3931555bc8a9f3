pub mod agency;

pub use agency::*;
