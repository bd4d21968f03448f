//! App layer - the view-state store and the actor that drives it
//!
//! The store actor receives UI events, updates state, and emits render
//! state snapshots.

pub mod state;
pub mod actor;
pub mod commands;
pub mod debounce;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::messages::{RenderState, UiEvent};

pub use state::ViewStateStore;
pub use actor::StoreActor;
pub use debounce::SearchDebouncer;

/// Channels and task handle of a running store actor
pub struct Session {
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
    pub render_rx: mpsc::UnboundedReceiver<RenderState>,
    pub handle: JoinHandle<ViewStateStore>,
}

/// Seed a store from `config` and spawn its actor on the current Tokio runtime
pub fn start_session(config: &Config) -> Result<Session> {
    let store = ViewStateStore::from_config(config)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, render_rx) = mpsc::unbounded_channel::<RenderState>();

    let actor = StoreActor::new(store, config.search_debounce(), render_tx);
    let handle = tokio::spawn(actor.run(ui_rx));

    Ok(Session {
        ui_tx,
        render_rx,
        handle,
    })
}
