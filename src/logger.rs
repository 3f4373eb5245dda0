use std::fs::File;
use std::future::Future;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing::Dispatch;
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;

pub static LOG_FILE_NAME: &str = "download.log";

static TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Console at INFO, or with `debug` a fresh `download.log` in `log_dir` at DEBUG.
///
/// `RUST_LOG` replaces the default filter when set.
pub fn build(debug: bool, log_dir: &Path) -> Result<Dispatch> {
    let default_filter = if debug {
        format!("info,{}=debug", env!("CARGO_CRATE_NAME"))
    } else {
        "info".to_owned()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let (console, file) = if debug {
        let log_file = File::create(log_dir.join(LOG_FILE_NAME))?;
        let file = tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_owned()));
        (None, Some(file))
    } else {
        let console = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_owned()));
        (Some(console), None)
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file);
    Ok(Dispatch::new(subscriber))
}

/// Creates the future and drives it with `dispatch` as the active subscriber,
/// so spans opened by `make` land in the same sink as the events inside.
pub fn scoped<F, M>(dispatch: &Dispatch, make: M) -> WithDispatch<F>
where
    F: Future,
    M: FnOnce() -> F,
{
    tracing::dispatcher::with_default(dispatch, make).with_subscriber(dispatch.clone())
}
