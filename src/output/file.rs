//! Append-only log file.
//!
//! Two write disciplines share one type. `Sync` writes, flushes and syncs on the
//! caller's thread under a mutex. `Queued` hands lines to a bounded channel
//! drained by one worker thread; `close` waits for the drain.

use super::SinkError;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Lines the queued writer buffers before producers block.
pub const QUEUE_CAPACITY: usize = 100;

/// Upper bound on how long `close` waits for the queued writer to drain.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// How lines reach the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Write and sync on the calling thread.
    #[default]
    Sync,
    /// Enqueue and let a background worker write.
    Queued,
}

impl std::str::FromStr for FileMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sync" => Ok(Self::Sync),
            "queued" | "async" => Ok(Self::Queued),
            _ => Err(format!("unknown file mode: '{s}'")),
        }
    }
}

struct Worker {
    sender: SyncSender<String>,
    done: Receiver<()>,
    handle: JoinHandle<()>,
    /// First failure the worker hit; taken by the next caller to report it.
    failure: Arc<Mutex<Option<std::io::Error>>>,
}

enum Backend {
    Direct(File),
    Queued(Worker),
}

/// One open log file. Closing is explicit through [`close`](Self::close) and
/// also happens on drop.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    mode: FileMode,
    backend: Mutex<Option<Backend>>,
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct"),
            Self::Queued(_) => f.write_str("Queued"),
        }
    }
}

impl FileSink {
    /// Opens `path` for appending, creating it and any missing parent directories.
    ///
    /// # Errors
    /// Fails if the directory or file cannot be created, or the worker thread cannot be spawned.
    pub fn open(path: impl AsRef<Path>, mode: FileMode) -> Result<Self, crate::Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let backend = match mode {
            FileMode::Sync => Backend::Direct(file),
            FileMode::Queued => Backend::Queued(spawn_worker(file)?),
        };

        Ok(Self {
            path,
            mode,
            backend: Mutex::new(Some(backend)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.backend
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Appends one line. In queued mode this blocks only while the queue is full,
    /// and reports a failure the worker hit on an earlier line.
    ///
    /// # Errors
    /// [`SinkError::Closed`] after `close`, [`SinkError::Io`] on write failure.
    pub fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut guard = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_mut() {
            None => Err(SinkError::Closed),
            Some(Backend::Direct(file)) => write_synced(file, line).map_err(SinkError::from),
            Some(Backend::Queued(worker)) => {
                if let Some(e) = take_failure(&worker.failure) {
                    return Err(SinkError::Io(e));
                }
                worker
                    .sender
                    .send(line.to_string())
                    .map_err(|_| SinkError::Closed)
            }
        }
    }

    /// Flushes, drains and releases the file. Only the first call does work.
    ///
    /// # Errors
    /// [`SinkError::Closed`] if already closed, [`SinkError::DrainTimeout`] if the
    /// worker is still busy after [`DRAIN_TIMEOUT`] (it is then left detached and
    /// may keep writing), [`SinkError::Io`] for a final flush failure or one the
    /// worker recorded.
    pub fn close(&self) -> Result<(), SinkError> {
        let backend = self
            .backend
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match backend {
            None => Err(SinkError::Closed),
            Some(Backend::Direct(mut file)) => {
                file.flush()?;
                file.sync_all()?;
                Ok(())
            }
            Some(Backend::Queued(worker)) => {
                let Worker {
                    sender,
                    done,
                    handle,
                    failure,
                } = worker;
                drop(sender);

                match done.recv_timeout(DRAIN_TIMEOUT) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        let _ = handle.join();
                    }
                    Err(RecvTimeoutError::Timeout) => return Err(SinkError::DrainTimeout),
                }

                take_failure(&failure).map_or(Ok(()), |e| Err(SinkError::Io(e)))
            }
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn write_synced(file: &mut File, line: &str) -> std::io::Result<()> {
    file.write_all(line.as_bytes())?;
    file.flush()?;
    file.sync_data()
}

fn take_failure(failure: &Mutex<Option<std::io::Error>>) -> Option<std::io::Error> {
    failure.lock().unwrap_or_else(PoisonError::into_inner).take()
}

fn spawn_worker(mut file: File) -> std::io::Result<Worker> {
    let (sender, receiver) = mpsc::sync_channel::<String>(QUEUE_CAPACITY);
    let (done_tx, done) = mpsc::channel();
    let failure = Arc::new(Mutex::new(None));
    let worker_failure = Arc::clone(&failure);

    let handle = thread::Builder::new()
        .name("tintlog-file".to_string())
        .spawn(move || {
            // Ends once every sender is dropped and the queue is empty.
            for line in receiver {
                if let Err(e) = write_synced(&mut file, &line) {
                    let mut slot = worker_failure
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                }
            }
            let _ = file.sync_all();
            let _ = done_tx.send(());
        })?;

    Ok(Worker {
        sender,
        done,
        handle,
        failure,
    })
}

/// Where a configured log file name ends up on disk. `~` is expanded, absolute
/// paths are kept, relative ones are anchored at the running executable's
/// directory so the location does not depend on the caller's working directory.
/// Falls back to the path as given when the executable path is unknown.
#[must_use]
pub fn resolve_path(name: &str) -> PathBuf {
    let expanded = shellexpand::tilde(name);
    let path = PathBuf::from(expanded.as_ref());
    if path.is_absolute() {
        return path;
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map_or(path.clone(), |dir| dir.join(&path))
}
