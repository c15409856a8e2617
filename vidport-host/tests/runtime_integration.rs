//! Runtime ordering and shutdown behavior.

mod common;

use common::{RecordingChannel, RecordingGate};
use tokio::sync::mpsc;
use vidport_core::{Insets, Orientation, PlayerConfig, PresentationMode, Viewport, WindowSize};
use vidport_host::{run, HostEvent, PlayerSession};

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

#[tokio::test]
async fn runtime_drains_interleaved_sources_in_arrival_order() {
    let (session, channel, gate) = session_with(Viewport::new(734.0, 375.0));
    let (tx, rx) = mpsc::unbounded_channel();

    tx.send(HostEvent::Message(
        r#"{"videoEvent":"loaded","height":100,"width":200}"#.to_string(),
    ))
    .expect("send");
    tx.send(HostEvent::ToggleFullscreen).expect("send");
    tx.send(HostEvent::WindowChanged {
        window: WindowSize::new(375.0, 812.0),
        insets: Insets::default(),
    })
    .expect("send");
    tx.send(HostEvent::Message(r#"{"videoEvent":"ended"}"#.to_string()))
        .expect("send");
    tx.send(HostEvent::ToggleFullscreen).expect("send");
    drop(tx);

    let session = run(session, rx).await;

    assert_eq!(session.mode(), PresentationMode::Normal);
    assert!(session.has_ended());
    assert_eq!(
        gate.requests(),
        vec![Orientation::Landscape, Orientation::Portrait]
    );

    // Enter fullscreen, viewport change while fullscreen, leave: two
    // transform applications followed by a clear.
    let scripts = channel.scripts();
    assert_eq!(scripts.len(), 3);
    assert!(scripts[0].contains("scaleX("));
    assert!(scripts[1].contains("scaleX("));
    assert!(scripts[2].contains("container.style.transform = ''"));
}

#[tokio::test]
async fn runtime_survives_arbitrary_message_bytes() {
    let (session, channel, _gate) = session_with(Viewport::new(734.0, 375.0));
    let (tx, rx) = mpsc::unbounded_channel();

    for raw in [
        "",
        "\u{0}\u{1}\u{2}",
        "{\"videoEvent\":",
        "[[[[",
        r#"{"videoEvent":"loaded","height":"NaN"}"#,
        r#"{"videoEvent":"loaded","height":211,"width":375}"#,
    ] {
        tx.send(HostEvent::Message(raw.to_string())).expect("send");
    }
    drop(tx);

    let session = run(session, rx).await;

    // Only the final, well-formed report landed.
    assert!((session.geometry().height - 211.0).abs() < 1e-4);
    assert!(channel.scripts().is_empty());
}
