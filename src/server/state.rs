//! Application state for the web server.

use crate::pipeline::ProgressEvent;
use crate::request::Credentials;
use crate::session::Session;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// Shared application state accessible to all route handlers.
///
/// Cloned per request (cheap Arc clones). One in-flight generation at a
/// time is the expected usage; the locks exist for interior mutability,
/// not for contention.
#[derive(Clone)]
pub struct AppState {
    /// Session-scoped results, mutated only on successful generation
    pub session: Arc<Mutex<Session>>,
    /// Session credentials, installed via `PUT /credentials`
    pub credentials: Arc<Mutex<Option<Credentials>>>,
    /// Progress milestone broadcast feeding the SSE stream
    progress: broadcast::Sender<ProgressEvent>,
}

impl AppState {
    pub fn new() -> Self {
        let (progress, _) = broadcast::channel(64);
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            credentials: Arc::new(Mutex::new(None)),
            progress,
        }
    }

    /// Subscribe to progress milestones.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.progress.subscribe()
    }

    /// Publish a progress milestone. Lagging or absent subscribers are
    /// fine; progress is purely informational.
    pub fn emit_progress(&self, event: &ProgressEvent) {
        let _ = self.progress.send(*event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
