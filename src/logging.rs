//! Tracing setup. The terminal belongs to the UI, so logs go to a file
//! through a non-blocking writer.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `wishlist=debug`.
pub const LOG_ENV: &str = "WISHLIST_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn split_path(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let file = path
        .file_name()
        .with_context(|| format!("log path `{}` has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(file)))
}

/// Install the global subscriber writing to `path` and bridge `log`
/// records into it. Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init_logging(path: &Path) -> anyhow::Result<WorkerGuard> {
    let (dir, file) = split_path(path)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory `{}`", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, &file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("a global tracing subscriber is already installed")?;
    tracing_log::LogTracer::init().context("failed to bridge log records")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_path_handles_bare_file_names() {
        let (dir, file) = split_path(Path::new("wishlist.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("wishlist.log"));

        let (dir, file) = split_path(Path::new("/tmp/logs/w.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(file, PathBuf::from("w.log"));
    }

    #[test]
    fn split_path_rejects_directories() {
        assert!(split_path(Path::new("/")).is_err());
    }
}
