pub mod impls;
pub mod tree;

pub use tree::*;
