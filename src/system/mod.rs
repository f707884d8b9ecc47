//! System-level modules
//!
//! - Logging initialization
//! - Platform data directory
//! - Persisted UI state

pub mod logging;
pub mod paths;
pub mod ui_state;

pub use logging::{LogTarget, init_logging};
pub use ui_state::{Theme, UiState, UiStateStore};
