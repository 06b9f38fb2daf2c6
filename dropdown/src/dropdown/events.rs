//! Event handling for the dropdown.

use crate::event::{Event, EventResult, Key};

use super::list::{Row, RowSource};
use super::DropdownButton;

/// What a point in the host hit, from the dropdown's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Trigger,
    Scrim,
    /// Line relative to the list's top edge
    List(u16),
}

impl DropdownButton {
    /// Route an input event.
    ///
    /// Taps on the trigger open the list, taps on the scrim close it, taps on
    /// a row select it. Presses highlight the row under them, wheel events
    /// scroll a clamped list, and Escape closes an open list.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match *event {
            Event::Press { x, y } => self.on_press(x, y),
            Event::Tap { x, y } => self.on_tap(x, y),
            Event::Scroll { x, y, delta } => self.on_scroll(x, y, delta),
            Event::Key(Key::Escape) if self.is_open() => {
                self.close();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn target(&self, x: u16, y: u16) -> Option<Target> {
        let host = self.host()?;
        let surface = host.try_borrow().ok()?;
        let hit = surface.hit_test(x, y)?;

        if hit == self.trigger_id {
            return Some(Target::Trigger);
        }
        if let Some(scrim) = &self.scrim
            && hit == scrim.id()
        {
            return Some(Target::Scrim);
        }
        if let Some(list) = &self.list
            && hit == list.id()
        {
            return Some(Target::List(y.saturating_sub(list.frame().y)));
        }
        None
    }

    fn row_under(&self, local_y: u16) -> Option<usize> {
        self.list.as_ref().and_then(|list| list.row_at(local_y))
    }

    fn on_press(&mut self, x: u16, y: u16) -> EventResult {
        match self.target(x, y) {
            Some(Target::List(local_y)) => {
                let row = self.row_under(local_y);
                if let Some(list) = self.list.as_mut() {
                    list.set_pressed(row);
                }
                EventResult::Consumed
            }
            Some(Target::Scrim) => EventResult::Consumed,
            Some(Target::Trigger) | None => EventResult::Ignored,
        }
    }

    fn on_tap(&mut self, x: u16, y: u16) -> EventResult {
        match self.target(x, y) {
            Some(Target::Trigger) => {
                self.open();
                EventResult::Consumed
            }
            Some(Target::Scrim) => {
                self.close();
                EventResult::Consumed
            }
            Some(Target::List(local_y)) => {
                match self.row_under(local_y) {
                    Some(index) => self.on_row_tapped(index),
                    None => {
                        // Empty space below the last row after the options shrank
                        if let Some(list) = self.list.as_mut() {
                            list.set_pressed(None);
                        }
                    }
                }
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn on_scroll(&mut self, x: u16, y: u16, delta: i16) -> EventResult {
        match self.target(x, y) {
            Some(Target::List(_)) => {
                if let Some(list) = self.list.as_mut()
                    && list.scroll_by(delta)
                {
                    log::trace!("[dropdown] {} scrolled to {}", self.id, list.scroll_offset());
                }
                EventResult::Consumed
            }
            Some(Target::Scrim) => EventResult::Consumed,
            Some(Target::Trigger) | None => EventResult::Ignored,
        }
    }
}

impl RowSource for DropdownButton {
    fn row_count(&self) -> usize {
        self.options.len()
    }

    fn render_row(&self, index: usize) -> Option<Row> {
        self.build_row(index)
    }

    /// Show the option on the trigger, report it, then close.
    fn on_row_tapped(&mut self, index: usize) {
        let Some(value) = self.options.get(index).cloned() else {
            log::debug!("[dropdown] {} ignoring tap on missing row {}", self.id, index);
            return;
        };

        log::debug!("[dropdown] {} selected {}: {}", self.id, index, value);
        self.title.clone_from(&value);
        if let Some(callback) = self.on_select.as_mut() {
            callback(index, &value);
        }
        self.close();
    }
}
