//! The dropdown button control.
//!
//! Split the way a widget usually is: `state` owns the data and the
//! open/close transitions, `events` routes input, `render` builds rows and
//! paints into a [`Buffer`](crate::Buffer).

mod appearance;
mod events;
mod list;
mod render;
mod scrim;
mod state;

pub use appearance::{Appearance, Invalidation, PendingRefresh};
pub use list::{ListChrome, Row, RowSource, SelectionList};
pub use scrim::Scrim;
pub use state::{DropdownButton, DropdownId, DropdownState};
