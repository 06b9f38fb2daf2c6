//! Anchored placement of the selection list below its trigger.

use serde::{Deserialize, Serialize};

use super::{Edges, Rect};

/// Vertical gap between the trigger's bottom edge and the list.
pub const LIST_GAP: u16 = 2;

/// Space kept free between the list and the bottom of the host's safe area.
pub const BOTTOM_MARGIN: u16 = 8;

/// Horizontal placement of the list relative to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListAlignment {
    /// List shares the trigger's left edge and width.
    #[default]
    Anchored,
    /// List starts at the host's left edge and extends to the trigger's right edge.
    FromZero,
}

/// Compute the list frame in host coordinates.
///
/// `trigger` must already be converted into the host's coordinate space.
/// The height is the full content height (`rows * row_height`) unless that
/// would run past `host.height - safe_area.bottom - BOTTOM_MARGIN`, in which
/// case it is clamped. Available space saturates at zero when the trigger sits
/// too low to fit anything.
pub fn list_frame(
    trigger: Rect,
    host: Rect,
    safe_area: Edges,
    rows: usize,
    row_height: u16,
    alignment: ListAlignment,
) -> Rect {
    let y = trigger.bottom().saturating_add(LIST_GAP);

    let (x, width) = match alignment {
        ListAlignment::Anchored => (trigger.x, trigger.width),
        ListAlignment::FromZero => (0, trigger.right()),
    };

    let content = (rows as u64).saturating_mul(row_height as u64);
    let available = host
        .height
        .saturating_sub(safe_area.bottom)
        .saturating_sub(y)
        .saturating_sub(BOTTOM_MARGIN);
    let height = content.min(available as u64) as u16;

    Rect::new(x, y, width, height)
}
