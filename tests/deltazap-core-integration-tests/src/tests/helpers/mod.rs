// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use parking_lot::Mutex;

use deltazap_core::{Client, ClientDelegate, ClientEvent};

/// Events are handled on background tasks. Polls `condition` (up to one second) until it holds.
pub async fn wait_until(description: &str, mut condition: impl FnMut() -> bool) -> Result<()> {
    for _ in 0..1000 {
        if condition() {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    bail!("Timed out waiting until {description}.")
}

#[derive(Default, Clone)]
pub struct RecordingDelegate {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl RecordingDelegate {
    pub fn events(&self) -> Vec<ClientEvent> {
        self.events.lock().clone()
    }
}

impl ClientDelegate for RecordingDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event)
    }
}
