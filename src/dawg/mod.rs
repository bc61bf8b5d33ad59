/// Single-pass minimising compiler for sorted word lists.
pub mod builder;
/// Depth-first word-list extraction from a loaded graph.
mod dumper;
/// Ordered sibling edge groups used during construction.
pub(crate) mod edges;
/// Error taxonomy for compile and dump operations.
pub mod error;
/// The packed edge arena and its on-disk codec.
pub mod graph;
/// Open-addressed structural interning of edge groups.
pub(crate) mod interner;
/// Packed 32-bit edge records.
pub mod node;
/// Sorted word stream tokenizer.
pub(crate) mod reader;

pub use builder::{compile_dawg, Builder};
pub use error::DawgError;
pub use graph::Dawg;
pub use node::Node;
