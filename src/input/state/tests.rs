use super::*;
use crate::config::{KeyBinding, KeybindingsConfig};
use crate::draw::{Color, Point, RecordingSink, ShapeId, SinkEvent, SvgSurface, color::*};
use crate::input::{Key, MouseButton};

fn create_test_pad() -> PadState<RecordingSink> {
    create_test_pad_with_limit(0)
}

fn create_test_pad_with_limit(max_shapes: usize) -> PadState<RecordingSink> {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    PadState::with_defaults(RecordingSink::new(), RED, max_shapes, action_map)
}

fn draw(pad: &mut PadState<RecordingSink>, center: (f64, f64), edge: (f64, f64)) {
    pad.on_mouse_press(MouseButton::Left, center.0, center.1);
    pad.on_mouse_motion(edge.0, edge.1);
    pad.on_mouse_release(MouseButton::Left);
}

#[test]
fn test_drag_reports_add_then_updates() {
    let mut pad = create_test_pad();
    draw(&mut pad, (0.0, 0.0), (3.0, 4.0));

    let events = pad.sink_mut().take();
    assert_eq!(events.len(), 2);
    match (&events[0], &events[1]) {
        (SinkEvent::Added(added), SinkEvent::Updated(updated)) => {
            assert_eq!(added.radius, 0.0);
            assert_eq!(updated.radius, 5.0);
            assert_eq!(added.id, updated.id);
        }
        other => panic!("unexpected events: {other:?}"),
    }

    let committed = pad.tracker().committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].center, Point::new(0.0, 0.0));
    assert_eq!(committed[0].fill, Color::new("#ff0000"));
}

#[test]
fn test_motion_without_press_is_ignored() {
    let mut pad = create_test_pad();
    pad.on_mouse_motion(10.0, 10.0);
    pad.on_mouse_release(MouseButton::Left);

    assert!(pad.sink().events.is_empty());
    assert!(pad.tracker().committed().is_empty());
}

#[test]
fn test_undo_removes_last_shape_from_sink() {
    let mut pad = create_test_pad();
    draw(&mut pad, (0.0, 0.0), (1.0, 0.0));
    draw(&mut pad, (10.0, 0.0), (12.0, 0.0));
    pad.sink_mut().take();

    pad.undo();
    let events = pad.sink_mut().take();
    assert!(matches!(&events[..], [SinkEvent::Removed(shape)] if shape.center.x == 10.0));
    assert_eq!(pad.tracker().committed().len(), 1);

    pad.undo();
    pad.undo();
    assert_eq!(pad.sink_mut().take().len(), 1);
    assert!(pad.tracker().committed().is_empty());
}

#[test]
fn test_clear_removes_every_shape_in_drawing_order() {
    let mut pad = create_test_pad();
    for x in [0.0, 10.0, 20.0] {
        draw(&mut pad, (x, 0.0), (x + 1.0, 0.0));
    }
    pad.sink_mut().take();

    pad.clear();
    let removed: Vec<f64> = pad
        .sink_mut()
        .take()
        .into_iter()
        .map(|event| match event {
            SinkEvent::Removed(shape) => shape.center.x,
            other => panic!("unexpected event: {other:?}"),
        })
        .collect();
    assert_eq!(removed, vec![0.0, 10.0, 20.0]);

    pad.clear();
    assert!(pad.sink().events.is_empty());
}

#[test]
fn test_second_press_discards_uncommitted_shape() {
    let mut pad = create_test_pad();
    pad.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    pad.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    pad.on_mouse_release(MouseButton::Left);

    let events = pad.sink_mut().take();
    assert!(matches!(
        &events[..],
        [
            SinkEvent::Added(first),
            SinkEvent::Removed(dropped),
            SinkEvent::Added(second),
        ] if first.id == dropped.id && second.id != first.id
    ));
    assert_eq!(pad.tracker().committed().len(), 1);
    assert_eq!(pad.tracker().committed()[0].center, Point::new(5.0, 5.0));
}

#[test]
fn test_right_click_cancels_drawing() {
    let mut pad = create_test_pad();
    pad.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    pad.on_mouse_press(MouseButton::Right, 0.0, 0.0);
    pad.on_mouse_release(MouseButton::Left);

    assert!(!pad.tracker().is_drawing());
    assert!(pad.tracker().committed().is_empty());
    assert!(matches!(
        pad.sink_mut().take().last(),
        Some(SinkEvent::Removed(_))
    ));
}

#[test]
fn test_escape_cancels_drawing() {
    let mut pad = create_test_pad();
    pad.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    pad.on_key_press(Key::Escape);

    assert!(!pad.tracker().is_drawing());
    assert!(pad.tracker().committed().is_empty());
}

#[test]
fn test_ctrl_z_undoes_but_plain_z_does_not() {
    let mut pad = create_test_pad();
    draw(&mut pad, (0.0, 0.0), (1.0, 1.0));

    pad.on_key_press(Key::Char('z'));
    assert_eq!(pad.tracker().committed().len(), 1);

    pad.on_key_press(Key::Ctrl);
    pad.on_key_press(Key::Char('z'));
    pad.on_key_release(Key::Ctrl);
    assert!(pad.tracker().committed().is_empty());
    assert!(!pad.modifiers.ctrl);
}

#[test]
fn test_clear_key_empties_canvas() {
    let mut pad = create_test_pad();
    draw(&mut pad, (0.0, 0.0), (1.0, 1.0));
    draw(&mut pad, (5.0, 5.0), (6.0, 6.0));

    pad.on_key_press(Key::Char('e'));
    assert!(pad.tracker().committed().is_empty());
}

#[test]
fn test_color_keys_change_next_shape_only() {
    let mut pad = create_test_pad();
    pad.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    pad.on_key_press(Key::Char('b'));
    pad.on_mouse_release(MouseButton::Left);
    draw(&mut pad, (10.0, 10.0), (12.0, 10.0));

    let committed = pad.tracker().committed();
    assert_eq!(committed[0].fill, RED);
    assert_eq!(committed[1].fill, BLUE);
    assert_eq!(pad.current_color, BLUE);
}

#[test]
fn test_press_binding_restores_held_modifiers() {
    let mut pad = create_test_pad();
    draw(&mut pad, (0.0, 0.0), (1.0, 1.0));
    pad.on_key_press(Key::Shift);

    pad.press_binding(&KeyBinding::parse("Ctrl+Z").unwrap());
    assert!(pad.tracker().committed().is_empty());
    assert!(pad.modifiers.shift);
    assert!(!pad.modifiers.ctrl);
}

#[test]
fn test_shape_limit_removes_rejected_shape_from_sink() {
    let mut pad = create_test_pad_with_limit(1);
    draw(&mut pad, (0.0, 0.0), (1.0, 1.0));
    pad.sink_mut().take();

    draw(&mut pad, (5.0, 5.0), (6.0, 6.0));
    let events = pad.sink_mut().take();
    assert!(matches!(events.last(), Some(SinkEvent::Removed(shape)) if shape.id == ShapeId(2)));
    assert_eq!(pad.tracker().committed().len(), 1);
}

#[test]
fn test_svg_surface_mirrors_committed_shapes() {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let mut pad = PadState::with_defaults(SvgSurface::new(200, 200), GREEN, 0, action_map);

    for x in [10.0, 50.0, 90.0] {
        pad.on_mouse_press(MouseButton::Left, x, 10.0);
        pad.on_mouse_motion(x, 20.0);
        pad.on_mouse_release(MouseButton::Left);
    }
    pad.undo();
    pad.on_mouse_press(MouseButton::Left, 150.0, 150.0);

    // The in-progress circle is visible but not committed.
    assert_eq!(pad.sink().len(), 3);
    assert_eq!(pad.tracker().committed().len(), 2);

    pad.clear();
    let surface = pad.into_sink();
    assert_eq!(surface.len(), 1);
    assert!(surface.to_svg().unwrap().contains(r#"cx="150""#));
}
