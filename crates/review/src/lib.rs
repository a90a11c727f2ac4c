//! review-rs: automatically save and restore previous 3D viewport views.
//!
//! While tracking is active, the current viewport camera is sampled on a
//! timer. A view the user stays on for a full sampling interval is recorded in
//! a bounded recent history, which can be stepped through later. Views can
//! also be saved explicitly under a name.
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use review::*;
//!
//! let mut session = Session::default();
//! let mut timer = ManualTimer::new();
//! let mut screen = Screen::with_viewport(ViewportCamera::default());
//!
//! commands::toggle(&mut session, &mut timer);
//!
//! // Two ticks on the same view record it.
//! timer.advance(Duration::from_secs(4), &mut session, &screen);
//! assert_eq!(session.history().len(), 1);
//!
//! // Move away, then jump back to the most recent recorded view.
//! screen.viewport_mut().unwrap().orbit(0.5, 0.0);
//! let report = commands::switch(&mut session, Direction::MostRecent, &mut screen);
//! assert_eq!(report.message, "View 1/1 restored");
//! ```
//!
//! # Architecture
//!
//! - [`review_core`] holds all state and logic: samples, the dwell detector,
//!   the recent history, saved views and navigation cursors.
//! - This crate adds a viewport camera model ([`ViewportCamera`],
//!   [`Screen`]), a deterministic timer ([`ManualTimer`]) and the
//!   user-facing [`commands`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

mod camera;
pub mod commands;
mod screen;
mod timer;

// Re-export core types
pub use review_core::{
    decode_rotation, encode_rotation, Collection, Direction, DwellDetector, NavigationCursor,
    Observation, Options, Quat, RecentHistory, RecentHistoryEntry, Result, ReviewError,
    SaveOutcome, SavedViewEntry, SavedViewSet, Scheduler, Session, SessionSnapshot, TickOutcome,
    Vec3, ViewId, ViewPosition, ViewSample, ViewportHost, DEFAULT_VIEW_NAME,
};

pub use camera::ViewportCamera;
pub use commands::{Report, ReportLevel};
pub use screen::{Area, Screen};
pub use timer::ManualTimer;

/// Installs the `env_logger` backend.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("review-rs logging initialized");
    }
}
