/// Input events understood by the dropdown, in host surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Primary button went down
    Press { x: u16, y: u16 },
    /// Primary button released; completes a tap
    Tap { x: u16, y: u16 },
    /// Wheel scroll, positive is down
    Scroll { x: u16, y: u16, delta: i16 },
    /// Key press
    Key(Key),
    /// Host resized
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// Whether the dropdown handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

impl Event {
    /// Translate a raw crossterm event. Only the left button counts as a tap.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{
            Event as CtEvent, KeyEventKind, MouseButton as CtBtn, MouseEventKind,
        };

        match event {
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(CtBtn::Left) => Some(Event::Press { x, y }),
                    MouseEventKind::Up(CtBtn::Left) => Some(Event::Tap { x, y }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1 }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1 }),
                    _ => None,
                }
            }
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Some(Event::Key(Key::from(key.code)))
            }
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}
