pub mod id;
pub mod weight;

pub use id::{EdgeId, VertexId};
pub use weight::{Weight, Weighted};
