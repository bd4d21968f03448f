//! Message types for communication between the UI layer and the store actor.
//!
//! The UI sends [`UiEvent`]s in; the actor answers with [`RenderState`] snapshots.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::RenderState;
