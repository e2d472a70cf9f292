//! Row saving.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use tokio::task::JoinHandle;

use crate::config::TableConfig;
use crate::error::SaveError;
use crate::notify::{Notification, Notifier};
use crate::table::TableRow;

/// Message shown when a save succeeds.
pub const SAVE_SUCCESS_MESSAGE: &str = "Done";

/// Message shown when a save fails.
pub const SAVE_FAILURE_MESSAGE: &str = "Error";

/// Message shown while a row is being saved.
pub fn pending_message(label: &str) -> String {
    format!("Saving {}", label)
}

/// Persists an edited row.
#[async_trait]
pub trait RowSaver<R: Send + Sync>: Send + Sync {
    async fn save(&self, row: &R) -> Result<(), SaveError>;
}

/// Outcome a [`SimulatedSaver`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveOutcome {
    #[default]
    Succeed,
    Fail,
}

/// Saver that waits a fixed delay and then succeeds or fails.
///
/// Nothing is stored anywhere.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSaver {
    delay: Duration,
    outcome: SaveOutcome,
}

impl SimulatedSaver {
    /// Create a saver that succeeds after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: SaveOutcome::Succeed,
        }
    }

    /// Create a saver using the configured delay.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.save_delay)
    }

    /// Make every save fail.
    pub fn failing(mut self) -> Self {
        self.outcome = SaveOutcome::Fail;
        self
    }

    /// Set the outcome.
    pub fn with_outcome(mut self, outcome: SaveOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

#[async_trait]
impl<R: Send + Sync> RowSaver<R> for SimulatedSaver {
    async fn save(&self, _row: &R) -> Result<(), SaveError> {
        tokio::time::sleep(self.delay).await;
        match self.outcome {
            SaveOutcome::Succeed => Ok(()),
            SaveOutcome::Fail => Err(SaveError::rejected("simulated failure")),
        }
    }
}

/// Save `row` and report pending, then success or failure, to `notifier`.
pub(crate) async fn save_with_notifications<R>(
    saver: &dyn RowSaver<R>,
    notifier: &dyn Notifier,
    row: &R,
    label: &str,
) -> Result<(), SaveError>
where
    R: TableRow + Send + Sync,
{
    notifier.notify(Notification::pending(pending_message(label)));
    match saver.save(row).await {
        Ok(()) => {
            info!("Saved row {}", row.key());
            notifier.notify(Notification::success(SAVE_SUCCESS_MESSAGE));
            Ok(())
        }
        Err(e) => {
            warn!("Saving row {} failed: {}", row.key(), e);
            notifier.notify(Notification::failure(SAVE_FAILURE_MESSAGE));
            Err(e)
        }
    }
}

/// Handle to a save started with [`spawn_save`].
#[derive(Debug)]
pub struct SaveHandle {
    handle: JoinHandle<Result<(), SaveError>>,
}

impl SaveHandle {
    /// Wait for the save to finish.
    pub async fn outcome(self) -> Result<(), SaveError> {
        self.handle.await.unwrap_or(Err(SaveError::Aborted))
    }

    /// Check if the save has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Start saving a row in the background (inline cell edits).
///
/// Notifications are sent from the spawned task. Saves are not serialised:
/// two saves of the same row both run and both notify, in no guaranteed
/// order. Must be called inside a tokio runtime.
pub fn spawn_save<R>(
    saver: Arc<dyn RowSaver<R>>,
    notifier: Arc<dyn Notifier>,
    row: R,
) -> SaveHandle
where
    R: TableRow + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        let label = row.label();
        save_with_notifications(saver.as_ref(), notifier.as_ref(), &row, &label).await
    });
    SaveHandle { handle }
}
