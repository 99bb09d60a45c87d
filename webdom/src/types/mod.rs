mod edges;

pub use edges::Edges;
