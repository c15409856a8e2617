//! Recording collaborator doubles shared across integration tests.

use std::sync::{Arc, Mutex};

use vidport_core::Orientation;
use vidport_host::{ContentChannel, OrientationGate};

/// Content channel that records every injected script.
#[derive(Clone, Default)]
pub struct RecordingChannel {
    scripts: Arc<Mutex<Vec<String>>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().expect("scripts lock").clone()
    }
}

impl ContentChannel for RecordingChannel {
    fn inject_script(&self, script: &str) {
        self.scripts
            .lock()
            .expect("scripts lock")
            .push(script.to_string());
    }
}

/// Orientation gate that records every lock request.
#[derive(Clone, Default)]
pub struct RecordingGate {
    requests: Arc<Mutex<Vec<Orientation>>>,
}

impl RecordingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<Orientation> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl OrientationGate for RecordingGate {
    fn request(&self, orientation: Orientation) {
        self.requests
            .lock()
            .expect("requests lock")
            .push(orientation);
    }
}
