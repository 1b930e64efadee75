//! Dense identifiers of vertices and edges.
//!
//! Vertices are numbered in the order they are registered in a graph, edges in
//! the order they are added. Both numberings start at zero and have no holes,
//! which lets the algorithms use the IDs as indices into contiguous arrays.

use std::fmt;

/// Index of a vertex in a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

/// Index of an edge in a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u32);

macro_rules! impl_id {
    ($id_ty:ident, $prefix:literal) => {
        impl $id_ty {
            pub fn from_usize(index: usize) -> Self {
                Self(index.try_into().expect("id type overflow"))
            }

            pub fn as_usize(&self) -> usize {
                self.0 as usize
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

impl_id!(VertexId, "v");
impl_id!(EdgeId, "e");
