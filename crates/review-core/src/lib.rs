//! Core state for review-rs.
//!
//! This crate contains everything that has actual logic:
//! - [`ViewSample`] snapshots of a viewport camera and their string encoding
//! - [`DwellDetector`], which turns periodic samples into history entries
//! - [`RecentHistory`] and [`SavedViewSet`], the two view collections
//! - [`NavigationCursor`] for stepping through a collection
//! - [`Session`], which ties them together with the activation flag
//!
//! The host application is reached through the [`ViewportHost`] and
//! [`Scheduler`] traits.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors return plain values; must_use adds noise here
#![allow(clippy::must_use_candidate)]

pub mod cursor;
pub mod detector;
pub mod error;
pub mod history;
pub mod host;
pub mod options;
pub mod sample;
pub mod saved;
pub mod state;

pub use cursor::{Direction, NavigationCursor};
pub use detector::{DwellDetector, Observation};
pub use error::{Collection, Result, ReviewError};
pub use history::{RecentHistory, RecentHistoryEntry};
pub use host::{Scheduler, TickOutcome, ViewportHost};
pub use options::{Options, SAVE_COUNT_RANGE, UPDATE_DELAY_RANGE};
pub use sample::{decode_rotation, encode_rotation, ViewSample};
pub use saved::{SaveOutcome, SavedViewEntry, SavedViewSet, ViewId, DEFAULT_VIEW_NAME};
pub use state::{Session, SessionSnapshot, ViewPosition};

// Re-export glam types for convenience
pub use glam::{Quat, Vec3};
