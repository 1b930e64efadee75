pub mod all_pairs;
pub mod shortest_paths;

pub use all_pairs::AllPairs;
pub use shortest_paths::{Path, PathNotFound, ShortestPaths};
