//! Row detail drawer.
//!
//! A [`DetailView`] holds a copy of one row and an edit buffer. Edits stay in
//! the buffer until [`DetailView::submit`] succeeds; the caller then applies
//! the saved row with [`TableState::update_row`](crate::table::TableState::update_row).
//!
//! ```text
//! open -> Open -> submit -> Submitting -> Closed(Saved)
//!                              |
//!                              +-> failure -> Open (buffer kept)
//!         Open -> close -> Closed(Discarded)
//! ```

mod save;
mod series;

pub use save::{
    RowSaver, SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE, SaveHandle, SaveOutcome,
    SimulatedSaver, pending_message, spawn_save,
};
pub use series::{SeriesPoint, sample_series};

use log::debug;

use crate::error::SaveError;
use crate::notify::Notifier;
use crate::table::{TableRow, TableState};

/// Why a detail view closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The edits were saved.
    Saved,
    /// The view was closed without saving; edits were dropped.
    Discarded,
}

/// Lifecycle phase of a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// Showing the row; edits allowed.
    Open,
    /// A save is in flight.
    Submitting,
    /// Closed; the view can be dropped.
    Closed(CloseReason),
}

/// Editable projection of one row.
#[derive(Debug, Clone)]
pub struct DetailView<R: TableRow> {
    /// The row as it was when opened (or last saved).
    original: R,
    /// Edit buffer.
    draft: R,
    phase: DetailPhase,
    series: Vec<SeriesPoint>,
}

impl<R: TableRow> DetailView<R> {
    /// Open a view on a snapshot of `row`.
    pub fn open(row: &R) -> Self {
        Self {
            original: row.clone(),
            draft: row.clone(),
            phase: DetailPhase::Open,
            series: sample_series(),
        }
    }

    /// Open a view on the row with `key`, or `None` if the table has no such row.
    pub fn open_key(table: &TableState<R>, key: &R::Key) -> Option<Self> {
        let Some(row) = table.row(key) else {
            debug!("DetailView: open for unknown row {}", key);
            return None;
        };
        Some(Self::open(row))
    }

    /// Replace the auxiliary chart series.
    pub fn with_series(mut self, series: Vec<SeriesPoint>) -> Self {
        self.series = series;
        self
    }

    /// Get the key of the row being shown.
    pub fn key(&self) -> R::Key {
        self.original.key()
    }

    /// Get the row as opened.
    pub fn original(&self) -> &R {
        &self.original
    }

    /// Get the edit buffer.
    pub fn draft(&self) -> &R {
        &self.draft
    }

    /// Get the edit buffer for editing. `None` unless the view is open.
    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match self.phase {
            DetailPhase::Open => Some(&mut self.draft),
            _ => None,
        }
    }

    /// Get the chart series.
    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    /// Get the lifecycle phase.
    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Check if the view is open for editing.
    pub fn is_open(&self) -> bool {
        self.phase == DetailPhase::Open
    }

    /// Close without saving. Edits are dropped.
    pub fn close(&mut self) {
        if matches!(self.phase, DetailPhase::Closed(_)) {
            return;
        }
        self.draft = self.original.clone();
        self.phase = DetailPhase::Closed(CloseReason::Discarded);
    }
}

impl<R: TableRow + PartialEq> DetailView<R> {
    /// Check if the buffer differs from the opened row.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }
}

impl<R: TableRow + Send + Sync> DetailView<R> {
    /// Save the edit buffer.
    ///
    /// Reports pending, then success or failure, to `notifier`. On success
    /// the view closes as saved and the saved row is returned for the caller
    /// to apply to the table. On failure the view reopens with the buffer
    /// untouched so the user can submit again. A buffer whose key was edited
    /// is refused with [`SaveError::KeyChanged`] before the saver runs.
    pub async fn submit(
        &mut self,
        saver: &dyn RowSaver<R>,
        notifier: &dyn Notifier,
    ) -> Result<R, SaveError> {
        if self.phase != DetailPhase::Open {
            return Err(SaveError::NotOpen);
        }
        let (original, edited) = (self.original.key(), self.draft.key());
        if original != edited {
            debug!("DetailView: key of row {} edited to {}", original, edited);
            return Err(SaveError::KeyChanged {
                original: original.to_string(),
                edited: edited.to_string(),
            });
        }
        self.phase = DetailPhase::Submitting;

        let label = self.original.label();
        let row = self.draft.clone();
        match save::save_with_notifications(saver, notifier, &row, &label).await {
            Ok(()) => {
                self.original = row.clone();
                self.phase = DetailPhase::Closed(CloseReason::Saved);
                Ok(row)
            }
            Err(e) => {
                self.phase = DetailPhase::Open;
                Err(e)
            }
        }
    }
}
