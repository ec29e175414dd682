//! Containers as children of containers.

mod common;

use common::{Note, Recorder, Resized, Switch, payload, plain_theme};
use core_events::Msg;
use core_layout::options::*;
use core_layout::{Container, Focusable, Label, Model, Sizeable, View};
use pretty_assertions::assert_eq;

#[test]
fn outer_set_size_cascades_to_inner_child() {
    let (leaf, sizes) = Recorder::new();
    let inner = Container::new(leaf, vec![with_border_all(), with_padding_horizontal(1)]);
    let mut outer = Container::new(inner, vec![with_padding_all(1), with_max_width(30)]);

    outer.set_size(50, 12);
    // outer: min(50, 30) - 2 = 28 wide, 12 - 2 = 10 high
    // inner: 28 - 2 border - 2 padding = 24, 10 - 2 border = 8
    assert_eq!(sizes.borrow().as_slice(), &[(24, 8)]);
}

#[test]
fn leaf_follow_up_travels_through_every_level() {
    let (leaf, _sizes) = Recorder::new();
    let inner = Container::new(leaf, vec![with_border_all()]);
    let mut outer = Container::new(inner, vec![with_border_all()]);
    assert_eq!(payload::<Resized>(outer.set_size(10, 6)), Some(Resized(6, 2)));
}

#[test]
fn focus_reaches_nested_leaf() {
    let (leaf, focused, seen) = Switch::new();
    let inner = Container::new(leaf, Vec::new());
    let mut outer = Container::new(inner, Vec::new());

    assert_eq!(payload::<Note>(outer.focus()), Some(Note("focused")));
    assert!(*focused.borrow());
    assert!(outer.is_focused());

    outer.update(&Msg::Tick);
    assert_eq!(seen.borrow().as_slice(), &["tick"]);
}

#[test]
fn inner_container_answers_focus_for_outer() {
    let inner = Container::new(Label::new("x"), Vec::new());
    let mut outer = Container::new(inner, Vec::new());
    outer.focus();
    // Inner is focusable, so outer reports inner's local flag.
    assert!(outer.is_focused());
    outer.blur();
    assert!(!outer.is_focused());
}

#[test]
fn nested_render_composes_boxes() {
    let inner = Container::new(
        Label::new("hi"),
        vec![with_border_all(), with_theme(plain_theme())],
    );
    let mut outer = Container::new(
        inner,
        vec![
            with_border_all(),
            with_rounded_border(),
            with_padding_horizontal(1),
            with_theme(plain_theme()),
        ],
    );
    outer.set_size(10, 5);

    let expected = [
        "╭────────╮",
        "│ ┌────┐ │",
        "│ │hi  │ │",
        "│ └────┘ │",
        "╰────────╯",
    ]
    .join("\n");
    assert_eq!(outer.view(), expected);
}
