//! Dropdown button state and the open/close transitions.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::layout::{list_frame, ListAlignment, Rect};
use crate::surface::{Surface, View};
use crate::types::{Color, TextStyle};

use super::list::{collect_rows, ListChrome, SelectionList};
use super::{Appearance, Invalidation, PendingRefresh, Scrim};

/// Unique identifier for a dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for DropdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

type SelectCallback = Box<dyn FnMut(usize, &str)>;

/// A button that reveals an anchored list of options.
///
/// The button's trigger is a view the application placed in a [`Surface`]
/// under `trigger_id`. After [`configure`](Self::configure), tapping that view
/// mounts a scrim and the list on top of the surface and shows them; tapping
/// the scrim or a row hides them again.
///
/// The surface is held weakly. Once the application drops it every operation
/// quietly does nothing.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use dropdown::{DropdownButton, Rect, Surface, View};
///
/// let host = Rc::new(RefCell::new(Surface::new(80, 24)));
/// host.borrow_mut().add_view(View::new("country", Rect::new(2, 1, 20, 1)));
///
/// let mut button = DropdownButton::new("country").with_title("Country");
/// button.configure(&host);
/// button.set_options(["Spain", "Portugal", "France"]);
/// button.on_select(|index, value| println!("picked {index}: {value}"));
///
/// button.open();
/// assert!(button.is_open());
/// assert_eq!(button.list().unwrap().frame(), Rect::new(2, 4, 20, 3));
/// ```
pub struct DropdownButton {
    pub(super) id: DropdownId,
    pub(super) trigger_id: String,
    pub(super) title: String,
    pub(super) indicator: Option<char>,
    pub(super) options: Vec<String>,
    pub(super) appearance: Appearance,
    pub(super) host: Option<Weak<RefCell<Surface>>>,
    pub(super) scrim: Option<Scrim>,
    pub(super) list: Option<SelectionList>,
    pub(super) state: DropdownState,
    pub(super) pending: PendingRefresh,
    pub(super) on_select: Option<SelectCallback>,
}

impl DropdownButton {
    pub fn new(trigger_id: impl Into<String>) -> Self {
        Self {
            id: DropdownId::new(),
            trigger_id: trigger_id.into(),
            title: String::new(),
            indicator: None,
            options: Vec::new(),
            appearance: Appearance::default(),
            host: None,
            scrim: None,
            list: None,
            state: DropdownState::Closed,
            pending: PendingRefresh::default(),
            on_select: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.set_appearance(appearance);
        self
    }

    pub fn id(&self) -> DropdownId {
        self.id
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    /// Label currently shown on the trigger.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn indicator(&self) -> Option<char> {
        self.indicator
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// `None` until the button has been configured.
    pub fn scrim(&self) -> Option<&Scrim> {
        self.scrim.as_ref()
    }

    /// `None` until the button has been configured.
    pub fn list(&self) -> Option<&SelectionList> {
        self.list.as_ref()
    }

    /// Invalidations waiting for the next [`refresh`](Self::refresh).
    pub fn pending(&self) -> PendingRefresh {
        self.pending
    }

    /// Whether a host is recorded and still alive.
    pub fn is_attached(&self) -> bool {
        self.host().is_some()
    }

    pub(super) fn host(&self) -> Option<Rc<RefCell<Surface>>> {
        self.host.as_ref().and_then(Weak::upgrade)
    }

    fn scrim_id(&self) -> String {
        format!("{}/scrim", self.id)
    }

    fn list_id(&self) -> String {
        format!("{}/list", self.id)
    }

    // -------------------------------------------------------------------------
    // Host
    // -------------------------------------------------------------------------

    /// Record the host surface and build the scrim and list on first call.
    ///
    /// Nothing is inserted into the surface until the first `open()`. Calling
    /// again just re-records the host; switching to a different surface takes
    /// the overlay out of the old one.
    pub fn attach(&mut self, host: &Rc<RefCell<Surface>>) {
        match self.host.as_ref().map(Weak::upgrade) {
            Some(Some(previous)) if !Rc::ptr_eq(&previous, host) => {
                log::debug!("[dropdown] {} moving to a new host", self.id);
                self.unmount(&previous);
                self.set_revealed(false);
                self.state = DropdownState::Closed;
            }
            Some(None) => {
                // The old host is gone along with the views mounted in it
                log::debug!("[dropdown] {} previous host dropped", self.id);
                self.set_revealed(false);
                self.state = DropdownState::Closed;
            }
            _ => {}
        }
        self.host = Some(Rc::downgrade(host));

        if self.scrim.is_none() {
            self.scrim = Some(Scrim::new(self.scrim_id(), self.appearance.scrim_tint));
        }
        if self.list.is_none() {
            self.list = Some(SelectionList::new(self.list_id(), &self.appearance));
            self.pending = PendingRefresh::all();
        }

        log::debug!(
            "[dropdown] {} attached (trigger {})",
            self.id,
            self.trigger_id
        );
    }

    pub fn configure(&mut self, host: &Rc<RefCell<Surface>>) {
        self.attach(host);
    }

    /// Like [`configure`](Self::configure), with a glyph drawn at the
    /// trigger's right edge.
    pub fn configure_with_indicator(&mut self, host: &Rc<RefCell<Surface>>, indicator: char) {
        self.indicator = Some(indicator);
        self.attach(host);
    }

    /// Take the overlay out of the host and forget it.
    pub fn detach(&mut self) {
        if let Some(host) = self.host() {
            self.unmount(&host);
        }
        self.host = None;
        self.set_revealed(false);
        self.state = DropdownState::Closed;
        log::debug!("[dropdown] {} detached", self.id);
    }

    fn unmount(&self, host: &Rc<RefCell<Surface>>) {
        if let Ok(mut surface) = host.try_borrow_mut() {
            surface.remove_view(&self.scrim_id());
            surface.remove_view(&self.list_id());
        }
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    /// Replace every option. Index in the list is the option's identity.
    ///
    /// An open list reloads its rows right away but keeps its frame until the
    /// next `open()`.
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.pending.mark(Invalidation::ListRows);
        log::debug!("[dropdown] {} now has {} options", self.id, self.options.len());

        if self.is_open() {
            self.refresh();
        }
    }

    /// Register the callback fired once per row tap with `(index, value)`.
    pub fn on_select(&mut self, callback: impl FnMut(usize, &str) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    // -------------------------------------------------------------------------
    // Style
    // -------------------------------------------------------------------------

    fn invalidate(&mut self, invalidation: Invalidation) -> Invalidation {
        self.pending.mark(invalidation);
        invalidation
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.appearance.row_height = self.appearance.row_height.max(1);
        self.pending = PendingRefresh::all();
    }

    pub fn set_item_font(&mut self, font: TextStyle) -> Invalidation {
        self.appearance.item_font = font;
        self.invalidate(Invalidation::ListRows)
    }

    pub fn set_item_text_color(&mut self, color: Color) -> Invalidation {
        self.appearance.item_text_color = color;
        self.invalidate(Invalidation::ListRows)
    }

    pub fn set_item_background(&mut self, color: Color) -> Invalidation {
        self.appearance.item_background = color;
        self.invalidate(Invalidation::ListRows)
    }

    pub fn set_item_selected_background(&mut self, color: Color) -> Invalidation {
        self.appearance.item_selected_background = color;
        self.invalidate(Invalidation::ListRows)
    }

    pub fn set_scrim_tint(&mut self, color: Color) -> Invalidation {
        self.appearance.scrim_tint = color;
        self.invalidate(Invalidation::Scrim)
    }

    pub fn set_alignment(&mut self, alignment: ListAlignment) -> Invalidation {
        self.appearance.alignment = alignment;
        self.invalidate(Invalidation::ListGeometry)
    }

    /// Zero is treated as one.
    pub fn set_row_height(&mut self, row_height: u16) -> Invalidation {
        self.appearance.row_height = row_height.max(1);
        self.pending.mark(Invalidation::ListRows);
        self.invalidate(Invalidation::ListGeometry)
    }

    pub fn set_border_color(&mut self, color: Color) -> Invalidation {
        self.appearance.border_color = color;
        self.invalidate(Invalidation::ListChrome)
    }

    pub fn set_border_width(&mut self, width: u16) -> Invalidation {
        self.appearance.border_width = width;
        self.invalidate(Invalidation::ListChrome)
    }

    pub fn set_separators(&mut self, separators: bool) -> Invalidation {
        self.appearance.separators = separators;
        self.invalidate(Invalidation::ListRows)
    }

    pub fn set_corner_radius(&mut self, radius: u16) -> Invalidation {
        self.appearance.corner_radius = radius;
        self.invalidate(Invalidation::ListChrome)
    }

    /// Apply queued invalidations to the scrim and list.
    ///
    /// Hosts call this once per render pass; `open()` always does. Geometry
    /// changes are only acknowledged here, the frame is recomputed on open.
    pub fn refresh(&mut self) -> PendingRefresh {
        let pending = self.pending.take();
        if pending.is_empty() {
            return pending;
        }

        if pending.scrim
            && let Some(scrim) = self.scrim.as_mut()
        {
            scrim.set_tint(self.appearance.scrim_tint);
        }

        if pending.chrome
            && let Some(list) = self.list.as_mut()
        {
            list.set_chrome(ListChrome::from(&self.appearance));
        }

        if pending.rows {
            let rows = collect_rows(&*self);
            let row_height = self.appearance.row_height;
            let background = self.appearance.item_background;
            if let Some(list) = self.list.as_mut() {
                list.reload(rows, row_height, background);
            }
        }

        log::trace!("[dropdown] {} refreshed {:?}", self.id, pending);
        pending
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// Show the list below the trigger.
    ///
    /// Mounts the scrim and list into the host on first use, recomputes the
    /// list frame and reveals both. Calling it while open just recomputes the
    /// frame. Without a live host this does nothing.
    pub fn open(&mut self) {
        let Some(host) = self.host() else {
            log::debug!("[dropdown] {} open ignored: no host", self.id);
            return;
        };
        self.refresh();

        let Ok(mut surface) = host.try_borrow_mut() else {
            log::debug!("[dropdown] {} open ignored: host busy", self.id);
            return;
        };
        let (Some(scrim), Some(list)) = (self.scrim.as_mut(), self.list.as_mut()) else {
            return;
        };
        let bounds = surface.bounds();

        if !surface.contains(scrim.id()) {
            surface.add_view(View::new(scrim.id(), bounds).hidden(true));
        }
        if !surface.contains(list.id()) {
            surface.add_view(View::new(list.id(), Rect::default()).hidden(true));
        }

        let trigger = surface
            .frame_in_surface(&self.trigger_id)
            .unwrap_or_default();
        let frame = list_frame(
            trigger,
            bounds,
            surface.safe_area(),
            self.options.len(),
            self.appearance.row_height,
            self.appearance.alignment,
        );

        scrim.set_frame(bounds);
        surface.set_frame(scrim.id(), bounds);
        list.set_frame(frame);
        list.reset_scroll();
        list.set_pressed(None);
        surface.set_frame(list.id(), frame);

        scrim.set_hidden(false);
        list.set_hidden(false);
        surface.set_hidden(scrim.id(), false);
        surface.set_hidden(list.id(), false);

        log::debug!(
            "[dropdown] {} open: trigger {:?} -> list {:?}",
            self.id,
            trigger,
            frame
        );
        self.state = DropdownState::Open;
    }

    /// Hide the scrim and list. Safe to call in any state.
    pub fn close(&mut self) {
        self.set_revealed(false);
        if let Some(host) = self.host()
            && let Ok(mut surface) = host.try_borrow_mut()
        {
            surface.set_hidden(&self.scrim_id(), true);
            surface.set_hidden(&self.list_id(), true);
        }

        if self.state == DropdownState::Open {
            log::debug!("[dropdown] {} closed", self.id);
        }
        self.state = DropdownState::Closed;
    }

    fn set_revealed(&mut self, revealed: bool) {
        if let Some(scrim) = self.scrim.as_mut() {
            scrim.set_hidden(!revealed);
        }
        if let Some(list) = self.list.as_mut() {
            list.set_hidden(!revealed);
            if !revealed {
                list.set_pressed(None);
            }
        }
    }
}

impl fmt::Debug for DropdownButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownButton")
            .field("id", &self.id)
            .field("trigger_id", &self.trigger_id)
            .field("title", &self.title)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}
