//! Drafting utilities that run locally

mod layer_name;

pub use layer_name::{LayerName, LayerPart};
