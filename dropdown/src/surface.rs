//! The host container a dropdown attaches to.
//!
//! A `Surface` is a flat, z-ordered list of views. Each view may name a
//! parent; its frame is relative to that parent. Views later in the list draw
//! and hit-test on top of earlier ones.

use crate::layout::{Edges, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: String,
    pub parent: Option<String>,
    pub frame: Rect,
    pub hidden: bool,
}

impl View {
    pub fn new(id: impl Into<String>, frame: Rect) -> Self {
        Self {
            id: id.into(),
            parent: None,
            frame,
            hidden: false,
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Surface {
    bounds: Rect,
    safe_area: Edges,
    views: Vec<View>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            bounds: Rect::from_size(width, height),
            safe_area: Edges::default(),
            views: Vec::new(),
        }
    }

    /// Reserve space the dropdown list must not cover, e.g. a status line.
    pub fn with_safe_area(mut self, safe_area: Edges) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn safe_area(&self) -> Edges {
        self.safe_area
    }

    pub fn set_safe_area(&mut self, safe_area: Edges) {
        self.safe_area = safe_area;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!(
            "[surface] resize {}x{} -> {}x{}",
            self.bounds.width,
            self.bounds.height,
            width,
            height
        );
        self.bounds = Rect::from_size(width, height);
    }

    /// Insert a view on top of everything else, or replace the view with the
    /// same id in place.
    pub fn add_view(&mut self, view: View) {
        match self.views.iter_mut().find(|v| v.id == view.id) {
            Some(existing) => *existing = view,
            None => {
                log::trace!("[surface] add view {} (parent {:?})", view.id, view.parent);
                self.views.push(view);
            }
        }
    }

    pub fn remove_view(&mut self, id: &str) -> Option<View> {
        let idx = self.views.iter().position(|v| v.id == id)?;
        Some(self.views.remove(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.iter().any(|v| v.id == id)
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn set_frame(&mut self, id: &str, frame: Rect) {
        if let Some(view) = self.views.iter_mut().find(|v| v.id == id) {
            view.frame = frame;
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(view) = self.views.iter_mut().find(|v| v.id == id) {
            view.hidden = hidden;
        }
    }

    /// Convert a view's frame into surface coordinates.
    ///
    /// Returns `None` if the view, or any ancestor it names, is missing.
    pub fn frame_in_surface(&self, id: &str) -> Option<Rect> {
        let view = self.view(id)?;
        let mut frame = view.frame;
        let mut parent = view.parent.as_deref();
        let mut depth = 0;

        while let Some(parent_id) = parent {
            // A parent cycle would otherwise never terminate
            depth += 1;
            if depth > self.views.len() {
                return None;
            }
            let parent_view = self.view(parent_id)?;
            frame = frame.offset(parent_view.frame.x, parent_view.frame.y);
            parent = parent_view.parent.as_deref();
        }

        Some(frame)
    }

    /// A view is visible when neither it nor any ancestor is hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        let mut current = self.view(id);
        let mut depth = 0;
        while let Some(view) = current {
            if view.hidden || depth > self.views.len() {
                return false;
            }
            depth += 1;
            current = match view.parent.as_deref() {
                Some(parent) => self.view(parent),
                None => return true,
            };
        }
        false
    }

    /// Find the topmost visible view containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        // Check in reverse order (last added = on top)
        self.views
            .iter()
            .rev()
            .filter(|view| self.is_visible(&view.id))
            .find(|view| {
                self.frame_in_surface(&view.id)
                    .is_some_and(|frame| frame.contains(x, y))
            })
            .map(|view| view.id.as_str())
    }
}
