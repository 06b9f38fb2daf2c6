use crate::layout::Rect;
use crate::types::Color;

/// Transparent overlay covering the host; tapping it closes the list.
#[derive(Debug, Clone)]
pub struct Scrim {
    id: String,
    frame: Rect,
    tint: Color,
    hidden: bool,
}

impl Scrim {
    pub(crate) fn new(id: String, tint: Color) -> Self {
        Self {
            id,
            frame: Rect::default(),
            tint,
            hidden: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
