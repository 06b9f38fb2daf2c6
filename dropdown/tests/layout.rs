use dropdown::layout::{BOTTOM_MARGIN, LIST_GAP};
use dropdown::{list_frame, Edges, ListAlignment, Rect};

const TALL_HOST: Rect = Rect::from_size(80, 1000);

// ============================================================================
// Height
// ============================================================================

#[test]
fn test_height_is_rows_times_row_height_when_it_fits() {
    let trigger = Rect::new(4, 2, 20, 1);
    for rows in 0..25 {
        for row_height in 1..5 {
            let frame = list_frame(
                trigger,
                TALL_HOST,
                Edges::default(),
                rows,
                row_height,
                ListAlignment::Anchored,
            );
            assert_eq!(
                frame.height as usize,
                rows * row_height as usize,
                "rows={rows} row_height={row_height}"
            );
        }
    }
}

#[test]
fn test_height_never_exceeds_available_space() {
    for host_height in 0..60u16 {
        for safe_bottom in 0..4u16 {
            for trigger_bottom in 1..30u16 {
                let trigger = Rect::new(0, trigger_bottom - 1, 10, 1);
                let frame = list_frame(
                    trigger,
                    Rect::from_size(80, host_height),
                    Edges::bottom(safe_bottom),
                    100,
                    1,
                    ListAlignment::Anchored,
                );
                let available = host_height as i32
                    - safe_bottom as i32
                    - (trigger_bottom as i32 + LIST_GAP as i32)
                    - BOTTOM_MARGIN as i32;
                assert_eq!(frame.height as i32, available.max(0));
            }
        }
    }
}

#[test]
fn test_height_at_exact_boundary() {
    // Host 30 tall, 2 reserved, trigger bottom at 5 -> 30 - 2 - 7 - 8 = 13
    let trigger = Rect::new(0, 4, 10, 1);
    let host = Rect::from_size(40, 30);
    let safe = Edges::bottom(2);

    let exact = list_frame(trigger, host, safe, 13, 1, ListAlignment::Anchored);
    assert_eq!(exact.height, 13);

    let over = list_frame(trigger, host, safe, 14, 1, ListAlignment::Anchored);
    assert_eq!(over.height, 13);

    let under = list_frame(trigger, host, safe, 12, 1, ListAlignment::Anchored);
    assert_eq!(under.height, 12);
}

#[test]
fn test_no_room_gives_zero_height() {
    let trigger = Rect::new(0, 18, 10, 1);
    let frame = list_frame(
        trigger,
        Rect::from_size(40, 20),
        Edges::default(),
        5,
        1,
        ListAlignment::Anchored,
    );
    assert_eq!(frame.height, 0);
    assert_eq!(frame.y, 21);
}

// ============================================================================
// Position and width
// ============================================================================

#[test]
fn test_list_starts_two_below_trigger() {
    let trigger = Rect::new(7, 3, 15, 2);
    let frame = list_frame(
        trigger,
        TALL_HOST,
        Edges::default(),
        3,
        1,
        ListAlignment::Anchored,
    );
    assert_eq!(frame.y, trigger.bottom() + LIST_GAP);
}

#[test]
fn test_anchored_matches_trigger_edges() {
    let trigger = Rect::new(7, 3, 15, 1);
    let frame = list_frame(
        trigger,
        TALL_HOST,
        Edges::default(),
        3,
        1,
        ListAlignment::Anchored,
    );
    assert_eq!(frame.x, 7);
    assert_eq!(frame.width, 15);
}

#[test]
fn test_from_zero_extends_to_trigger_right_edge() {
    let trigger = Rect::new(7, 3, 15, 1);
    let frame = list_frame(
        trigger,
        TALL_HOST,
        Edges::default(),
        3,
        1,
        ListAlignment::FromZero,
    );
    assert_eq!(frame.x, 0);
    assert_eq!(frame.width, 22);
}

#[test]
fn test_alignment_only_changes_horizontal_placement() {
    let host = Rect::from_size(60, 25);
    for (trigger, rows) in [
        (Rect::new(3, 1, 10, 1), 4),
        (Rect::new(20, 6, 8, 3), 30),
        (Rect::new(0, 0, 1, 1), 0),
    ] {
        let anchored = list_frame(trigger, host, Edges::bottom(1), rows, 2, ListAlignment::Anchored);
        let from_zero = list_frame(trigger, host, Edges::bottom(1), rows, 2, ListAlignment::FromZero);
        assert_eq!(anchored.y, from_zero.y);
        assert_eq!(anchored.height, from_zero.height);
    }
}
