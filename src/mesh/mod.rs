pub mod rect;

pub use rect::RectMesh;
