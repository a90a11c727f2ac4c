//! Seams to the host application.
//!
//! The host owns the viewports and the event loop. review-rs only needs to
//! read and write one viewport camera and to register a single repeating
//! timer.

use std::time::Duration;

use crate::sample::ViewSample;

/// Access to the host's 3D viewport.
///
/// When several 3D viewports exist the host should use the first one it
/// finds.
pub trait ViewportHost {
    /// Reads the current view, or `None` if no 3D viewport is available.
    fn read_view(&self) -> Option<ViewSample>;

    /// Moves the viewport to `view`. Returns false if no 3D viewport is
    /// available.
    fn write_view(&mut self, view: &ViewSample) -> bool;
}

/// What the timer callback asks of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run the callback again after the given delay.
    Reschedule(Duration),
    /// Deregister the timer.
    Stop,
}

/// The host's repeating timer facility.
///
/// At most one timer is registered at a time. Returning
/// [`TickOutcome::Stop`] from a tick deregisters it permanently; it has to be
/// registered again to resume.
pub trait Scheduler {
    /// Registers the tick callback, first firing after `first_interval`.
    fn register(&mut self, first_interval: Duration);

    /// Removes the tick callback if registered.
    fn unregister(&mut self);

    /// Returns whether the tick callback is currently registered.
    fn is_registered(&self) -> bool;
}
