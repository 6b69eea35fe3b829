// Library exports for dsforest
pub mod union_find;

pub use union_find::DisjointSetForest;
