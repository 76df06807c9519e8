pub mod index;
pub mod model;

pub use index::{GraphIndex, IndexedEdge};
pub use model::{EdgeSpec, GraphSpec, NodeSpec};
