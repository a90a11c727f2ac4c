//! User-facing commands.
//!
//! Each command mirrors a button or menu entry of the host UI. Commands never
//! fail: errors are turned into a [`Report`] that the host shows in its status
//! bar.

use review_core::{
    Collection, Direction, ReviewError, SaveOutcome, Scheduler, Session, ViewId, ViewPosition,
    ViewportHost,
};

/// Severity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    /// Informational status.
    Info,
    /// The command could not do what was asked.
    Error,
}

/// Short status message produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Severity.
    pub level: ReportLevel,
    /// Human-readable message.
    pub message: String,
}

impl Report {
    /// Creates an informational report.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    /// Creates an error report.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Error,
            message: message.into(),
        }
    }

    /// Returns true for error reports.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == ReportLevel::Error
    }
}

impl From<ReviewError> for Report {
    fn from(err: ReviewError) -> Self {
        let message = match err {
            ReviewError::EmptyCollection(Collection::Recent) => "No recent views".to_string(),
            ReviewError::EmptyCollection(Collection::Saved) => "No saved views".to_string(),
            ReviewError::StaleIdentifier(_) => "View not found".to_string(),
            ReviewError::NothingSelected => "No views selected".to_string(),
            ReviewError::NoViewportAvailable => "No 3D viewport available".to_string(),
            other => other.to_string(),
        };
        Report::error(message)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Turns automatic tracking on or off.
pub fn toggle(session: &mut Session, scheduler: &mut impl Scheduler) -> Report {
    if session.toggle(scheduler) {
        Report::info("ReView activated")
    } else {
        Report::info("ReView deactivated")
    }
}

/// Steps through the recent history.
pub fn switch(session: &mut Session, direction: Direction, host: &mut impl ViewportHost) -> Report {
    restored(session.navigate_recent(direction, host))
}

/// Steps through the saved views.
pub fn switch_saved(
    session: &mut Session,
    direction: Direction,
    host: &mut impl ViewportHost,
) -> Report {
    restored(session.navigate_saved(direction, host))
}

/// Empties the recent history.
pub fn clear_recent(session: &mut Session) -> Report {
    session.clear_recent();
    Report::info("Views cleared")
}

/// Empties the saved views.
pub fn clear_saved(session: &mut Session) -> Report {
    session.clear_saved();
    Report::info("Saved views cleared")
}

/// Saves the current view into the selected saved views, or as a new one.
pub fn save_view(session: &mut Session, host: &impl ViewportHost) -> Report {
    match session.save_view(host) {
        Ok(SaveOutcome::Created(id)) => Report::info(format!("View {id} saved")),
        Ok(SaveOutcome::Updated(1)) => Report::info("1 view updated"),
        Ok(SaveOutcome::Updated(n)) => Report::info(format!("{n} views updated")),
        Err(err) => err.into(),
    }
}

/// Restores a saved view by id.
pub fn restore_saved(session: &mut Session, id: ViewId, host: &mut impl ViewportHost) -> Report {
    match session.restore_saved(id, host) {
        Ok(_) => {
            let name = session
                .saved()
                .get(id)
                .map_or_else(|| id.to_string(), |entry| entry.name.clone());
            Report::info(format!("{name} restored"))
        }
        Err(err) => err.into(),
    }
}

/// Deletes every selected saved view.
pub fn delete_selected(session: &mut Session) -> Report {
    match session.delete_selected() {
        Ok(1) => Report::info("1 view deleted"),
        Ok(n) => Report::info(format!("{n} views deleted")),
        Err(err) => err.into(),
    }
}

/// The `position/count` label shown under the navigation buttons.
pub fn position_label(session: &Session) -> String {
    label(session.recent_cursor().index(), session.history().len())
}

/// Like [`position_label`], for the saved views.
pub fn saved_position_label(session: &Session) -> String {
    label(session.saved_cursor().index(), session.saved().len())
}

fn label(index: usize, count: usize) -> String {
    if count == 0 {
        "0/0".to_string()
    } else {
        ViewPosition { index, count }.to_string()
    }
}

fn restored(result: review_core::Result<ViewPosition>) -> Report {
    match result {
        Ok(position) => Report::info(format!("View {position} restored")),
        Err(err) => err.into(),
    }
}
