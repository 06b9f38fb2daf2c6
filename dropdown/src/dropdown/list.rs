//! The selection list shown below the trigger.

use crate::layout::Rect;
use crate::types::{Color, TextStyle};

use super::Appearance;

/// A rendered row, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub text: String,
    pub font: TextStyle,
    pub foreground: Color,
    pub background: Color,
    pub selected_background: Color,
    /// Draw a divider below this row
    pub separator: bool,
}

/// What the list needs from whoever owns the options.
pub trait RowSource {
    fn row_count(&self) -> usize;

    /// Build the row at `index`, or `None` past the end.
    fn render_row(&self, index: usize) -> Option<Row>;

    fn on_row_tapped(&mut self, index: usize);
}

/// Collect every row a source currently offers.
pub(crate) fn collect_rows(source: &dyn RowSource) -> Vec<Row> {
    (0..source.row_count())
        .filter_map(|index| source.render_row(index))
        .collect()
}

/// Border drawn around the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListChrome {
    pub border_color: Color,
    pub border_width: u16,
    pub corner_radius: u16,
}

impl From<&Appearance> for ListChrome {
    fn from(appearance: &Appearance) -> Self {
        Self {
            border_color: appearance.border_color,
            border_width: appearance.border_width,
            corner_radius: appearance.corner_radius,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionList {
    id: String,
    frame: Rect,
    hidden: bool,
    rows: Vec<Row>,
    row_height: u16,
    /// Fill for lines with no row behind them
    background: Color,
    chrome: ListChrome,
    /// Scroll position in lines
    scroll: u16,
    pressed: Option<usize>,
}

impl SelectionList {
    pub(crate) fn new(id: String, appearance: &Appearance) -> Self {
        Self {
            id,
            frame: Rect::default(),
            hidden: true,
            rows: Vec::new(),
            row_height: appearance.row_height.max(1),
            background: appearance.item_background,
            chrome: ListChrome::from(appearance),
            scroll: 0,
            pressed: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn chrome(&self) -> ListChrome {
        self.chrome
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Total height of all rows, in lines.
    pub fn content_height(&self) -> u32 {
        self.rows.len() as u32 * self.row_height as u32
    }

    /// Map a line relative to the list's top edge to a row index.
    pub fn row_at(&self, local_y: u16) -> Option<usize> {
        if local_y >= self.frame.height {
            return None;
        }
        let line = local_y as u32 + self.scroll as u32;
        let index = (line / self.row_height as u32) as usize;
        (index < self.rows.len()).then_some(index)
    }

    pub(crate) fn reload(&mut self, rows: Vec<Row>, row_height: u16, background: Color) {
        log::trace!("[dropdown] {} reload {} rows", self.id, rows.len());
        self.rows = rows;
        self.row_height = row_height.max(1);
        self.background = background;
        if self.pressed.is_some_and(|index| index >= self.rows.len()) {
            self.pressed = None;
        }
        self.clamp_scroll();
    }

    pub(crate) fn set_chrome(&mut self, chrome: ListChrome) {
        self.chrome = chrome;
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.clamp_scroll();
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub(crate) fn set_pressed(&mut self, pressed: Option<usize>) {
        self.pressed = pressed;
    }

    /// Scroll by whole rows. Returns whether the offset changed.
    pub(crate) fn scroll_by(&mut self, rows: i16) -> bool {
        let before = self.scroll;
        let lines = rows as i32 * self.row_height as i32;
        let target = (self.scroll as i32 + lines).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
        self.scroll != before
    }

    pub(crate) fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> u16 {
        self.content_height()
            .saturating_sub(self.frame.height as u32)
            .min(u16::MAX as u32) as u16
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
