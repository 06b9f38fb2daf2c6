mod color;
mod style;

pub use color::{Color, Rgb};
pub use style::TextStyle;
