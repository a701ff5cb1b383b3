//! In-memory application store.
//!
//! [`AppStore`] is the single authoritative state container for every
//! domain collection: projects, purchase orders, certificates,
//! incidents, notifications, the activity timeline, the current
//! search/filter state, and transient UI state. All mutation entry
//! points live here, and the mutations that require it fan out into
//! exactly one notification and one timeline event.
//!
//! State is memory-only and single-owner (`&mut self`); there is no
//! persistence and no concurrent writer, so mutations are plain
//! synchronous calls with immediately visible effects.

pub mod ids;
pub mod seed;
pub mod store;
pub mod ui;

pub use store::AppStore;
pub use ui::{Modal, UiState};
