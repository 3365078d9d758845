//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::donation::{DonationStore, EditSessionController};

/// The state of the web server.
///
/// The donation store and the edit session controller are owned here and
/// shared with route handlers through `Arc<Mutex<...>>`. Each instance is
/// independent, so tests can construct as many as they need.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The in-memory collection of donations.
    pub donations: Arc<Mutex<DonationStore>>,

    /// Tracks which donation, if any, is currently being edited.
    pub edit_session: Arc<Mutex<EditSessionController>>,
}

impl AppState {
    /// Create a new [AppState] with an empty donation store and no active
    /// edit session.
    pub fn new() -> Self {
        Self::default()
    }
}
