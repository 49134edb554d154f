//! Chart Package Loader
//! Parses the schedule chart package on a background thread and signals
//! completion through a one-shot channel. The result is observed at most
//! once; if the signal never arrives, the schedule chart is simply never
//! configured.

use crate::data::DataTable;
use serde::Deserialize;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info};

const SCHEDULE_PACKAGE_JSON: &str = include_str!("../assets/day_schedule.json");

/// The schedule chart package: a titled two-column table.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulePackage {
    pub title: String,
    pub columns: [String; 2],
    pub rows: Vec<(String, f64)>,
}

impl SchedulePackage {
    pub fn into_table(self) -> DataTable {
        DataTable::new(self.columns, self.rows)
    }
}

/// Parse the embedded schedule package.
pub fn embedded_package() -> Result<SchedulePackage, serde_json::Error> {
    serde_json::from_str(SCHEDULE_PACKAGE_JSON)
}

/// Load-completion signal from the background thread.
pub enum LoadResult {
    Complete(SchedulePackage),
    Error(String),
}

/// One-shot package loader. `load` starts the background parse; `poll`
/// is the non-blocking readiness check.
pub struct PackageLoader {
    rx: Option<Receiver<LoadResult>>,
}

impl PackageLoader {
    /// Start loading the package in a background thread.
    pub fn load() -> Self {
        let (tx, rx) = channel();

        thread::spawn(move || {
            info!("loading schedule chart package");
            match embedded_package() {
                Ok(package) => {
                    info!(rows = package.rows.len(), "schedule chart package ready");
                    let _ = tx.send(LoadResult::Complete(package));
                }
                Err(e) => {
                    error!("schedule chart package failed to parse: {e}");
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });

        Self { rx: Some(rx) }
    }

    #[cfg(test)]
    fn from_receiver(rx: Receiver<LoadResult>) -> Self {
        Self { rx: Some(rx) }
    }

    /// Non-blocking check for the load-completion signal. Yields the
    /// result at most once; afterwards (or if the sender went away
    /// without sending) the loader goes quiet.
    pub fn poll(&mut self) -> Option<LoadResult> {
        let rx = self.rx.take()?;
        match rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => {
                self.rx = Some(rx);
                None
            }
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// True while the signal may still arrive.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}
