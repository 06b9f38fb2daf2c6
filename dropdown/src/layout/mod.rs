mod anchor;
mod edges;
mod rect;

pub use anchor::{list_frame, ListAlignment, BOTTOM_MARGIN, LIST_GAP};
pub use edges::Edges;
pub use rect::Rect;
