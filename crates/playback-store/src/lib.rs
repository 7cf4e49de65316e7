//! Reactive state container for the playback dashboard.
//!
//! [`PlaybackDataStore`] is built once per session and cloned into every
//! consumer. Consumers read [`PlaybackState`] through
//! [`PlaybackDataStore::snapshot`] or follow changes through
//! [`PlaybackDataStore::subscribe`].

pub mod state;
pub mod store;

pub use state::PlaybackState;
pub use store::{PlaybackDataStore, LOAD_ERROR_MESSAGE};
