//! Append-only JSON transaction log
//!
//! The log file holds one JSON array; every append re-reads the whole array,
//! pushes a new entry and rewrites the file. A mutex serializes appends from
//! the same process. Log failures are the caller's to report as warnings: a
//! decided transaction still reaches the operator even if its write fails.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use chrono::{DateTime, Utc};
use emv_transaction::TransactionResult;
use serde::{Deserialize, Serialize};

/// One persisted transaction outcome.
#[derive(Debug, Serialize, Deserialize)]
struct LogEntry {
    id: String,
    pan: String,
    data_validade: String,
    cvm: String,
    approved: bool,
    message: String,
    timestamp: DateTime<Utc>,
}

/// Transaction logger backed by a JSON array file.
pub struct JsonLogger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLogger {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Append one transaction outcome to the log file.
    ///
    /// A missing file starts a fresh array; an unreadable or unparsable one
    /// is an error, so existing history is never clobbered.
    pub fn log(&self, result: &TransactionResult) -> anyhow::Result<()> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries: Vec<LogEntry> = match fs::read(&self.path) {
            Ok(data) => {
                serde_json::from_slice(&data).context("failed to parse existing log file")?
            }
            Err(_) => Vec::new(),
        };

        entries.push(LogEntry {
            id: generate_id(),
            pan: result.pan.clone(),
            data_validade: result.expiry.format("%m/%Y").to_string(),
            cvm: result.cvm.clone(),
            approved: result.approved,
            message: result.message.clone(),
            timestamp: result.timestamp,
        });

        let data = serde_json::to_vec_pretty(&entries).context("failed to serialize log")?;
        fs::write(&self.path, data).context("failed to write log file")?;

        Ok(())
    }
}

fn generate_id() -> String {
    format!("TRX-{}", Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn result(pan: &str, approved: bool) -> TransactionResult {
        TransactionResult {
            approved,
            message: "Transaction authorized successfully".to_string(),
            pan: pan.to_string(),
            expiry: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            cvm: "1F0000".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_log_appends_entries() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonLogger::new(dir.path().join("transactions.json"));

        logger.log(&result("4539578763621486", true)).unwrap();
        logger.log(&result("4222222222222", false)).unwrap();

        let data = fs::read(dir.path().join("transactions.json")).unwrap();
        let entries: Vec<LogEntry> = serde_json::from_slice(&data).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].pan, "4539578763621486");
        assert!(entries[0].approved);
        assert_eq!(entries[0].data_validade, "12/2025");
        assert!(entries[0].id.starts_with("TRX-"));
        assert_eq!(entries[1].pan, "4222222222222");
        assert!(!entries[1].approved);
    }

    #[test]
    fn test_log_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        fs::write(&path, b"not json").unwrap();

        let logger = JsonLogger::new(path.clone());
        assert!(logger.log(&result("4539578763621486", true)).is_err());

        // Existing content survives the failed append
        assert_eq!(fs::read(&path).unwrap(), b"not json");
    }
}
