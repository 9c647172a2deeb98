//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to a size-capped
//! log file. When the file grows past its cap it is shifted to `<name>.log.1`,
//! older files move up by one, and the oldest is dropped, so disk use stays
//! bounded.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default size cap per file
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Default number of rotated files kept next to the live one
pub const DEFAULT_MAX_FILES: usize = 3;

struct RollingState {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingState {
    fn live_path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    fn rotated_path(&self, n: usize) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, n))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(self.live_path())?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_files).rev() {
            let from = self.rotated_path(n);
            if from.exists() {
                fs::rename(&from, self.rotated_path(n + 1))?;
            }
        }
        fs::rename(self.live_path(), self.rotated_path(1))?;
        self.file = File::create(self.live_path())?;
        self.written = 0;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }
}

/// File sink with size-based rotation. Cheap to clone; clones share the file.
#[derive(Clone)]
pub struct RollingFile {
    state: Arc<Mutex<RollingState>>,
}

impl RollingFile {
    /// Open `<dir>/<app_name>.log` for appending, creating `dir` if needed
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let name = format!("{}.log", app_name);
        let path = dir.join(&name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir: dir.to_path_buf(),
                name,
                max_bytes,
                max_files,
                file,
                written,
            })),
        })
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize global logging with default rotation limits.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. `log` records are
/// forwarded into tracing.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
}

pub fn init_logger_with(
    log_dir: PathBuf,
    app_name: &str,
    max_bytes: u64,
    max_files: usize,
) -> Result<(), String> {
    let file = RollingFile::open(&log_dir, app_name, max_bytes, max_files)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    log::info!(
        "[{}] {} logging to {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        app_name,
        log_dir.display()
    );
    Ok(())
}

pub fn info(msg: &str) -> Result<(), String> {
    log::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    log::error!("{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_go_to_live_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
        file.write_all(b"hello\n").unwrap();
        file.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, "hello\n");
    }

    #[test]
    fn test_rotation_keeps_bounded_file_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 10, 2).unwrap();
        for i in 0..6 {
            file.write_all(format!("line {}...\n", i).as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.log", "app.log.1", "app.log.2"]);
        let live = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(live, "line 5...\n");
        let newest = fs::read_to_string(dir.path().join("app.log.1")).unwrap();
        assert_eq!(newest, "line 4...\n");
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
            file.write_all(b"first\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
        file.write_all(b"second\n").unwrap();
        file.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_helpers_succeed_without_installed_logger() {
        assert!(info("document store connected").is_ok());
        assert!(error("document store connection failed").is_ok());
    }
}
