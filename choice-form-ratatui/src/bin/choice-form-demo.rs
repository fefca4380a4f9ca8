//! Storage/user demo page in the terminal.
//!
//! ```text
//! choice-form-demo --query "?storage=business&user=arlene"
//! choice-form-demo --url "http://localhost:3000/?storage=startup&user=wade"
//! RUST_LOG=debug choice-form-demo --log-file /tmp/choice-form.log
//! ```
//!
//! The page owns the terminal, so logs never go to stdout or stderr. They are
//! written to `--log-file`, or to `choice-form-demo.log` in the working
//! directory when only `RUST_LOG` is set. With neither, nothing is logged.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use choice_form::PrefillParams;
use choice_form_ratatui::RatatuiPageBackend;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE: &str = "choice-form-demo.log";

#[derive(Parser, Debug)]
#[command(version, about = "Radio group and combo box that report scalar values")]
struct Args {
    /// Full page address to read the prefill parameters from.
    #[arg(long, conflicts_with = "query")]
    url: Option<String>,

    /// Query string to read the prefill parameters from.
    #[arg(long)]
    query: Option<String>,

    /// Title shown at the top of the page.
    #[arg(long)]
    title: Option<String>,

    /// File to append logs to (filtered by `RUST_LOG`, default `warn`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Where logs go, if anywhere.
fn log_path(log_file: Option<PathBuf>, rust_log: Option<OsString>) -> Option<PathBuf> {
    log_file.or_else(|| rust_log.map(|_| PathBuf::from(DEFAULT_LOG_FILE)))
}

fn init_logging(path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("{} does not name a file", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _log_guard = log_path(args.log_file.clone(), std::env::var_os("RUST_LOG"))
        .map(|path| init_logging(&path))
        .transpose()?;

    let params = match (&args.url, &args.query) {
        (Some(url), _) => {
            PrefillParams::from_url(url).with_context(|| format!("reading prefill from {url}"))?
        }
        (None, Some(query)) => PrefillParams::from_query(query),
        (None, None) => PrefillParams::default(),
    };

    let mut backend = RatatuiPageBackend::new();
    if let Some(title) = args.title {
        backend = backend.with_title(title);
    }

    let submitted = backend.run(params)?;
    println!("{}", serde_json::to_string_pretty(&submitted)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_without_rust_log() {
        assert_eq!(log_path(None, None), None);
    }

    #[test]
    fn rust_log_alone_logs_to_default_file() {
        assert_eq!(
            log_path(None, Some("debug".into())),
            Some(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn explicit_log_file_wins() {
        let args = Args::try_parse_from(["choice-form-demo", "--log-file", "/tmp/page.log"]).unwrap();
        assert_eq!(
            log_path(args.log_file, Some("debug".into())),
            Some(PathBuf::from("/tmp/page.log"))
        );
    }

    #[test]
    fn url_and_query_conflict() {
        let res = Args::try_parse_from(["choice-form-demo", "--url", "http://x/", "--query", "a=b"]);
        assert!(res.is_err());
    }
}
