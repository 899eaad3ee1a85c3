//! # File I/O Module
//!
//! Handles history and export file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent two front-ends appending to one log at once
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! History logs are JSON files (conventionally `history.json`). Lock files
//! add a `.lock` extension and carry metadata about who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use impeller_core::calculations::{evaluate, DesignInput};
//! use impeller_core::file_io::{load_history, save_history, FileLock};
//! use std::path::Path;
//!
//! let path = Path::new("history.json");
//!
//! // Hold the lock across load-modify-save
//! let lock = FileLock::acquire(path, "designer")?;
//! let mut history = load_history(path)?;
//!
//! let input = DesignInput::default();
//! history.record(&input, &evaluate(&input)?);
//! save_history(&history, path)?;
//!
//! // Lock is released when dropped
//! drop(lock);
//! # Ok::<(), impeller_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::history::{DesignHistory, SCHEMA_VERSION};

/// Lock file metadata stored in .lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (login name or email)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

/// Get the hostname of the current machine
fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// Login name of the current user, or "unknown"
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. .lock file with metadata for user visibility
pub struct FileLock {
    /// Path to the locked file
    target_path: PathBuf,
    /// Path to the lock file
    lock_path: PathBuf,
    /// The underlying file handle (keeps OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(CalcError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = sidecar_path(path, "lock");
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(CalcError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                // Stale lock, take it over
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        // Non-blocking exclusive OS lock
        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json =
            serde_json::to_string_pretty(&info).map_err(|e| CalcError::serialization(e.to_string()))?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            target_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = sidecar_path(path, "lock");
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Get the path to the locked file
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
        // OS lock is released when _lock_file is dropped
    }
}

/// `history.json` + "lock" → `history.json.lock`
fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut sidecar = path.to_path_buf();
    let extension = sidecar
        .extension()
        .map(|e| format!("{}.{}", e.to_string_lossy(), suffix))
        .unwrap_or_else(|| suffix.to_string());
    sidecar.set_extension(extension);
    sidecar
}

/// Read lock info from a lock file
fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let mut file = File::open(lock_path).map_err(|e| {
        CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::serialization(e.to_string()))
}

/// Check if a lock is stale (the process that created it is no longer running)
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
        }
    }

    // Locks older than a day are abandoned
    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Write bytes to a file with atomic replace semantics.
///
/// 1. Write to a temporary file (`<name>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = sidecar_path(path, "tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a design history with atomic write semantics.
///
/// Callers sharing the file should hold a [`FileLock`] across the
/// load-modify-save cycle.
pub fn save_history(history: &DesignHistory, path: &Path) -> CalcResult<()> {
    let json =
        serde_json::to_string_pretty(history).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())
}

/// Load a design history from a file.
///
/// # Returns
///
/// * `Ok(DesignHistory)` - Loaded history, or an empty one if the file does not exist.
///   Records beyond [`HISTORY_CAPACITY`](crate::history::HISTORY_CAPACITY) are
///   dropped, oldest first.
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_history(path: &Path) -> CalcResult<DesignHistory> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DesignHistory::new()),
        Err(e) => {
            return Err(CalcError::file_error("open", path.display().to_string(), e.to_string()))
        }
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let mut history: DesignHistory = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&history.version)?;
    history.trim_to_capacity();

    Ok(history)
}

/// Load a history, returning the current lock holder if another process has it.
pub fn load_history_with_lock_check(path: &Path) -> CalcResult<(DesignHistory, Option<LockInfo>)> {
    let history = load_history(path)?;
    let lock_info = FileLock::check(path);
    Ok((history, lock_info))
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor is a breaking change
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{evaluate, DesignInput};
    use crate::history::{HistoryRecord, HISTORY_CAPACITY};
    use std::env::temp_dir;

    fn temp_history_path(name: &str) -> PathBuf {
        temp_dir().join(format!("impeller_test_{}.json", name))
    }

    #[test]
    fn test_sidecar_path_generation() {
        let path = Path::new("/path/to/history.json");
        assert_eq!(sidecar_path(path, "lock"), Path::new("/path/to/history.json.lock"));
        assert_eq!(sidecar_path(path, "tmp"), Path::new("/path/to/history.json.tmp"));
        assert_eq!(sidecar_path(Path::new("history"), "lock"), Path::new("history.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("designer");
        assert_eq!(info.user_id, "designer");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_history_path("roundtrip");

        let mut history = DesignHistory::new();
        let input = DesignInput::default();
        let result = evaluate(&input).unwrap();
        let id = history.record(&input, &result).id;
        save_history(&history, &path).unwrap();

        let loaded = load_history(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.latest().unwrap().id, id);
        assert_eq!(loaded, history);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let path = temp_history_path("does_not_exist");
        let _ = fs::remove_file(&path);
        let history = load_history(&path).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let path = temp_history_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let err = load_history(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_history_path("atomic");
        let tmp_path = sidecar_path(&path, "tmp");

        save_history(&DesignHistory::new(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_history_path("lock_test");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "designer").unwrap();
        assert_eq!(lock.info.user_id, "designer");
        assert_eq!(lock.target_path(), path.as_path());

        let lock_path = sidecar_path(&path, "lock");
        assert!(lock_path.exists());

        // Held by a live process
        let second = FileLock::acquire(&path, "someone else");
        assert!(matches!(second, Err(CalcError::FileLocked { .. })));
        assert!(FileLock::check(&path).is_some());

        drop(lock);
        assert!(!lock_path.exists());
        assert!(FileLock::check(&path).is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_newer_schema_is_rejected_on_load() {
        let path = temp_history_path("newer_schema");
        let mut history = DesignHistory::new();
        history.version = "0.9.0".to_string();
        save_history(&history, &path).unwrap();

        let err = load_history(&path).unwrap_err();
        assert!(matches!(err, CalcError::VersionMismatch { .. }));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_infinite_input_survives_save_and_load() {
        let path = temp_history_path("infinite_input");
        let input = DesignInput {
            rpm: f64::INFINITY,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();
        let mut history = DesignHistory::new();
        history.record(&input, &result);
        save_history(&history, &path).unwrap();

        let loaded = load_history(&path).unwrap();
        let record = loaded.latest().unwrap();
        assert!(record.inputs.rpm.is_infinite());
        assert_eq!(record.d2_mm, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_oversized_file_is_trimmed_on_load() {
        let path = temp_history_path("oversized");
        let records: Vec<HistoryRecord> = (0..25)
            .map(|i| {
                let input = DesignInput {
                    flow_rate_cfm: 1000.0 + i as f64,
                    ..DesignInput::default()
                };
                let result = evaluate(&input).unwrap();
                HistoryRecord::new(&input, &result)
            })
            .collect();
        let json = serde_json::json!({ "version": SCHEMA_VERSION, "records": records });
        fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

        let loaded = load_history(&path).unwrap();
        assert_eq!(loaded.len(), HISTORY_CAPACITY);
        assert_eq!(loaded.records().next().unwrap().flow, Some(1005.0));
        assert_eq!(loaded.latest().unwrap().flow, Some(1024.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_history_path("lock_check");
        save_history(&DesignHistory::new(), &path).unwrap();

        let (loaded, lock_info) = load_history_with_lock_check(&path).unwrap();
        assert!(loaded.is_empty());
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }
}
