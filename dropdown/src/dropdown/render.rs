//! Row building and painting for the dropdown.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::text::truncate_to_width;
use crate::types::{Color, TextStyle};

use super::list::{ListChrome, Row, SelectionList};
use super::DropdownButton;

impl DropdownButton {
    /// Style the option at `index` with the current appearance.
    pub(super) fn build_row(&self, index: usize) -> Option<Row> {
        let text = self.options.get(index)?;
        let appearance = &self.appearance;
        Some(Row {
            index,
            text: text.clone(),
            font: appearance.item_font,
            foreground: appearance.item_text_color,
            background: appearance.item_background,
            selected_background: appearance.item_selected_background,
            separator: appearance.separators && index + 1 < self.options.len(),
        })
    }

    /// Paint the trigger, then the overlay if open.
    pub fn paint(&self, buf: &mut Buffer) {
        self.paint_trigger(buf);
        self.paint_overlay(buf);
    }

    /// Draw the title, and the indicator if any, over the trigger's view.
    ///
    /// Colors already in the buffer are kept; the host owns the trigger's look.
    pub fn paint_trigger(&self, buf: &mut Buffer) {
        let Some(host) = self.host() else {
            return;
        };
        let Ok(surface) = host.try_borrow() else {
            return;
        };
        if !surface.is_visible(&self.trigger_id) {
            return;
        }
        let Some(frame) = surface.frame_in_surface(&self.trigger_id) else {
            return;
        };
        if frame.is_empty() {
            return;
        }

        let y = frame.y + (frame.height - 1) / 2;
        let fg = buf.get(frame.x, y).map(|cell| cell.fg).unwrap_or_default();
        let reserved = if self.indicator.is_some() { 2 } else { 0 };
        let label = truncate_to_width(&self.title, frame.width.saturating_sub(reserved) as usize);
        buf.put_str(frame.x, y, frame.right(), &label, fg, TextStyle::new());

        if let Some(glyph) = self.indicator {
            let x = frame.right().saturating_sub(1);
            buf.put_str(x, y, frame.right(), glyph.encode_utf8(&mut [0; 4]), fg, TextStyle::new());
        }
    }

    /// Draw the scrim and list. Does nothing while closed or without a live
    /// host.
    pub fn paint_overlay(&self, buf: &mut Buffer) {
        if !self.is_open() || !self.is_attached() {
            return;
        }
        let (Some(scrim), Some(list)) = (&self.scrim, &self.list) else {
            return;
        };

        tint(buf, scrim.frame(), scrim.tint());
        paint_border(buf, list);
        paint_rows(buf, list);
    }
}

/// Blend a color over both layers of every cell in `rect`.
fn tint(buf: &mut Buffer, rect: Rect, color: Color) {
    let rect = rect.intersection(&buf.area());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = color.composite(cell.bg);
                cell.fg = color.composite(cell.fg);
            }
        }
    }
}

/// Clear `rect` and give it a background blended over what was there.
fn fill(buf: &mut Buffer, rect: Rect, color: Color) {
    let rect = rect.intersection(&buf.area());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = color.composite(cell.bg);
                cell.style = TextStyle::new();
                cell.wide_continuation = false;
            }
        }
    }
}

fn border_glyphs(chrome: &ListChrome) -> Option<(char, char, char, char, char, char)> {
    match (chrome.border_width, chrome.corner_radius) {
        (0, _) => None,
        (1, 0) => Some(('┌', '┐', '└', '┘', '─', '│')),
        (1, _) => Some(('╭', '╮', '╰', '╯', '─', '│')),
        _ => Some(('┏', '┓', '┗', '┛', '━', '┃')),
    }
}

/// The border sits just outside the list frame so it never covers a row.
fn paint_border(buf: &mut Buffer, list: &SelectionList) {
    let chrome = list.chrome();
    let Some((tl, tr, bl, br, h, v)) = border_glyphs(&chrome) else {
        return;
    };

    let frame = list.frame();
    let left = frame.x as i32 - 1;
    let top = frame.y as i32 - 1;
    let right = frame.right() as i32;
    let bottom = frame.bottom() as i32;
    let color = chrome.border_color;

    put_border(buf, left, top, tl, color);
    put_border(buf, right, top, tr, color);
    put_border(buf, left, bottom, bl, color);
    put_border(buf, right, bottom, br, color);

    for x in frame.x..frame.right() {
        put_border(buf, x as i32, top, h, color);
        put_border(buf, x as i32, bottom, h, color);
    }
    for y in frame.y..frame.bottom() {
        put_border(buf, left, y as i32, v, color);
        put_border(buf, right, y as i32, v, color);
    }
}

fn put_border(buf: &mut Buffer, x: i32, y: i32, ch: char, color: Color) {
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = color.composite(cell.bg);
        cell.style = TextStyle::new();
        cell.wide_continuation = false;
    }
}

fn paint_rows(buf: &mut Buffer, list: &SelectionList) {
    let frame = list.frame();
    let row_height = list.row_height() as u32;
    let label_line = (row_height - 1) / 2;

    for line in 0..frame.height {
        let y = frame.y + line;
        let line_rect = Rect::new(frame.x, y, frame.width, 1);
        let content = line as u32 + list.scroll_offset() as u32;
        let index = (content / row_height) as usize;
        let within = content % row_height;

        let Some(row) = list.rows().get(index) else {
            fill(buf, line_rect, list.background());
            continue;
        };

        let background = if list.pressed() == Some(index) {
            row.selected_background
        } else {
            row.background
        };
        fill(buf, line_rect, background);
        let line_bg = buf.get(frame.x, y).map(|cell| cell.bg).unwrap_or_default();

        if row.separator && row_height >= 2 && within == row_height - 1 {
            let rule = "─".repeat(frame.width as usize);
            let fg = list.chrome().border_color.composite(line_bg);
            buf.put_str(frame.x, y, frame.right(), &rule, fg, TextStyle::new());
        } else if within == label_line {
            let mut font = row.font;
            if row.separator && row_height == 1 {
                font.underline = true;
            }
            let text = truncate_to_width(&row.text, frame.width as usize);
            let fg = row.foreground.composite(line_bg);
            buf.put_str(frame.x, y, frame.right(), &text, fg, font);
        }
    }
}
