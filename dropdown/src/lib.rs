//! A dropdown button for cell-based terminal surfaces.
//!
//! The trigger lives as a view inside a host [`Surface`]. Tapping it mounts a
//! full-surface scrim and an anchored selection list above the host's content;
//! tapping the scrim or a row hides them again.

pub mod buffer;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod layout;
pub mod surface;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use dropdown::{
    Appearance, DropdownButton, DropdownId, DropdownState, Invalidation, ListChrome,
    PendingRefresh, Row, RowSource, Scrim, SelectionList,
};
pub use error::{ColorParseError, ConfigError};
pub use event::{Event, EventResult, Key};
pub use layout::{list_frame, Edges, ListAlignment, Rect};
pub use surface::{Surface, View};
pub use types::*;
