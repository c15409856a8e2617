//! End-to-end session behavior against recording collaborators.

mod common;

use common::{RecordingChannel, RecordingGate};
use vidport_core::{
    Insets, Orientation, PlayerConfig, PresentationMode, Viewport, WindowSize,
};
use vidport_host::PlayerSession;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn session_with(
    viewport: Viewport,
) -> (PlayerSession, RecordingChannel, RecordingGate) {
    let config = PlayerConfig::new("721284295", 200.0).expect("valid config");
    let channel = RecordingChannel::new();
    let gate = RecordingGate::new();
    let session = PlayerSession::new(config, viewport)
        .with_content_channel(Box::new(channel.clone()))
        .with_orientation_gate(Box::new(gate.clone()));
    (session, channel, gate)
}

#[test]
fn toggle_twice_round_trips_mode_geometry_and_orientation() {
    let (mut session, channel, gate) = session_with(Viewport::new(734.0, 375.0));
    session.handle_message(r#"{"videoEvent":"loaded","height":211,"width":375}"#);
    let initial = session.geometry();

    session.toggle_fullscreen();
    session.toggle_fullscreen();

    assert_eq!(session.mode(), PresentationMode::Normal);
    assert_eq!(session.geometry(), initial);
    assert_eq!(
        gate.requests(),
        vec![Orientation::Landscape, Orientation::Portrait]
    );

    let scripts = channel.scripts();
    assert_eq!(scripts.len(), 2);
    assert!(scripts[0].contains("scaleX("));
    assert!(scripts[1].contains("container.style.transform = ''"));
}

#[test]
fn fullscreen_script_carries_the_computed_transform() {
    let (mut session, channel, _gate) = session_with(Viewport::new(400.0, 300.0));
    session.handle_message(r#"{"videoEvent":"loaded","height":100,"width":200}"#);

    session.toggle_fullscreen();

    let scripts = channel.scripts();
    assert_eq!(scripts.len(), 1);
    // Rendered box is 400x800 for 100x200 content: scale 4x4, centered
    // horizontally, vertical offset at a third.
    assert!(scripts[0].contains("scaleX(4) scaleY(4) translateX(300px) translateY(100px)"));
}

#[test]
fn fullscreen_with_unusable_dimensions_locks_but_defers_the_transform() {
    let (mut session, channel, gate) = session_with(Viewport::new(734.0, 0.0));

    session.toggle_fullscreen();

    assert_eq!(gate.requests(), vec![Orientation::Landscape]);
    assert!(channel.scripts().is_empty());

    let geometry = session.geometry();
    assert!(geometry.height.is_finite());
    assert!(geometry.width.is_finite());

    // The first usable report catches the live transform up.
    session.handle_message(r#"{"videoEvent":"loaded","height":100,"width":200}"#);
    assert_eq!(channel.scripts().len(), 1);
}

#[test]
fn malformed_messages_change_nothing() {
    let (mut session, channel, gate) = session_with(Viewport::new(734.0, 375.0));
    let before = session.geometry();

    for raw in [
        "",
        "not json",
        "{",
        r#"{"videoEvent":"paused"}"#,
        r#"{"videoEvent":"loaded","height":0,"width":0}"#,
        r#"{"somethingElse":true}"#,
    ] {
        session.handle_message(raw);
    }

    assert_eq!(session.geometry(), before);
    assert!(!session.has_ended());
    assert!(channel.scripts().is_empty());
    assert!(gate.requests().is_empty());
}

#[test]
fn partial_dimension_reports_merge() {
    let (mut session, _channel, _gate) = session_with(Viewport::new(734.0, 375.0));

    session.handle_message(r#"{"videoEvent":"loaded","height":211}"#);
    assert!(approx_eq(session.geometry().height, 211.0));

    // A width-only report leaves the merged height in place.
    session.handle_message(r#"{"videoEvent":"loaded","width":400}"#);
    assert!(approx_eq(session.geometry().height, 211.0));
}

#[test]
fn ended_is_set_once_and_survives_later_reports() {
    let (mut session, _channel, _gate) = session_with(Viewport::new(734.0, 375.0));

    session.handle_message(r#"{"videoEvent":"ended"}"#);
    assert!(session.has_ended());

    session.handle_message(r#"{"videoEvent":"loaded","height":211,"width":375}"#);
    assert!(session.has_ended());
}

#[test]
fn window_changes_track_the_transform_only_in_fullscreen() {
    let (mut session, channel, _gate) = session_with(Viewport::new(734.0, 375.0));
    session.handle_message(r#"{"videoEvent":"loaded","height":100,"width":200}"#);

    session.window_changed(WindowSize::new(812.0, 375.0), Insets::default());
    assert!(channel.scripts().is_empty());

    session.toggle_fullscreen();
    let scripts_after_toggle = channel.scripts().len();

    session.window_changed(
        WindowSize::new(375.0, 812.0),
        Insets {
            top: 0.0,
            bottom: 0.0,
            left: 44.0,
            right: 44.0,
        },
    );
    assert_eq!(channel.scripts().len(), scripts_after_toggle + 1);
}

#[test]
fn absent_collaborators_degrade_to_no_ops() {
    let config = PlayerConfig::new("721284295", 200.0).expect("valid config");
    let mut session = PlayerSession::new(config, Viewport::new(734.0, 375.0));

    session.handle_message(r#"{"videoEvent":"loaded","height":100,"width":200}"#);
    session.toggle_fullscreen();
    session.toggle_fullscreen();

    assert_eq!(session.mode(), PresentationMode::Normal);
}

#[test]
fn embed_page_is_pinned_to_the_viewport_width() {
    let (session, _channel, _gate) = session_with(Viewport::new(734.0, 375.0));

    let page = session.embed_page().expect("valid embed page");
    assert!(page.contains("id: '721284295'"));
    assert!(page.contains("width: 375,"));
}
