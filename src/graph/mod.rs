//! Graph model: weighted undirected graphs, k-subset enumeration and
//! token graph construction.

pub mod model;
pub mod subsets;
pub mod token;

pub use model::{Edge, Graph};
pub use subsets::{binomial, SubsetIter};
pub use token::{token_graph, MAX_TOKEN_NODES};
