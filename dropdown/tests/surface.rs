use dropdown::{Rect, Surface, View};

fn nested_surface() -> Surface {
    let mut surface = Surface::new(80, 24);
    surface.add_view(View::new("panel", Rect::new(10, 5, 40, 10)));
    surface.add_view(View::new("row", Rect::new(2, 3, 30, 2)).parent("panel"));
    surface.add_view(View::new("button", Rect::new(4, 1, 12, 1)).parent("row"));
    surface
}

// ============================================================================
// Coordinate conversion
// ============================================================================

#[test]
fn test_frame_in_surface_adds_parent_origins() {
    let surface = nested_surface();
    assert_eq!(
        surface.frame_in_surface("button"),
        Some(Rect::new(16, 9, 12, 1))
    );
    assert_eq!(
        surface.frame_in_surface("panel"),
        Some(Rect::new(10, 5, 40, 10))
    );
}

#[test]
fn test_frame_in_surface_missing_view_or_parent() {
    let mut surface = Surface::new(80, 24);
    surface.add_view(View::new("orphan", Rect::new(1, 1, 2, 2)).parent("gone"));
    assert_eq!(surface.frame_in_surface("nope"), None);
    assert_eq!(surface.frame_in_surface("orphan"), None);
}

#[test]
fn test_frame_in_surface_parent_cycle() {
    let mut surface = Surface::new(80, 24);
    surface.add_view(View::new("a", Rect::new(1, 1, 2, 2)).parent("b"));
    surface.add_view(View::new("b", Rect::new(1, 1, 2, 2)).parent("a"));
    assert_eq!(surface.frame_in_surface("a"), None);
    assert!(!surface.is_visible("a"));
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_add_view_replaces_in_place() {
    let mut surface = nested_surface();
    surface.add_view(View::new("panel", Rect::new(0, 0, 5, 5)));
    assert_eq!(surface.views().len(), 3);
    assert_eq!(surface.views()[0].id, "panel");
    assert_eq!(surface.view("panel").unwrap().frame, Rect::new(0, 0, 5, 5));
}

#[test]
fn test_remove_view() {
    let mut surface = nested_surface();
    let removed = surface.remove_view("row").unwrap();
    assert_eq!(removed.id, "row");
    assert!(!surface.contains("row"));
    assert!(surface.remove_view("row").is_none());
}

#[test]
fn test_hidden_ancestor_hides_descendants() {
    let mut surface = nested_surface();
    assert!(surface.is_visible("button"));
    surface.set_hidden("panel", true);
    assert!(!surface.is_visible("button"));
    assert!(!surface.is_visible("missing"));
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_topmost_wins() {
    let mut surface = Surface::new(40, 20);
    surface.add_view(View::new("bottom", Rect::new(0, 0, 20, 10)));
    surface.add_view(View::new("top", Rect::new(5, 5, 20, 10)));

    assert_eq!(surface.hit_test(7, 7), Some("top"));
    assert_eq!(surface.hit_test(1, 1), Some("bottom"));
    assert_eq!(surface.hit_test(39, 19), None);
}

#[test]
fn test_hit_test_skips_hidden() {
    let mut surface = Surface::new(40, 20);
    surface.add_view(View::new("bottom", Rect::new(0, 0, 20, 10)));
    surface.add_view(View::new("top", Rect::new(0, 0, 20, 10)).hidden(true));
    assert_eq!(surface.hit_test(3, 3), Some("bottom"));
}

#[test]
fn test_hit_test_uses_surface_coordinates() {
    let surface = nested_surface();
    assert_eq!(surface.hit_test(16, 9), Some("button"));
    assert_eq!(surface.hit_test(15, 9), Some("row"));
    assert_eq!(surface.hit_test(4, 1), None);
}
