//! Subcommand implementations.
//!
//! Each module exposes a single `execute` function; argument parsing lives in
//! `crate::cli`, business logic in `rnarch-core`.

use std::borrow::Cow;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;
use crate::output::OutputManager;

pub mod completions;
pub mod feature;
pub mod init;
pub mod model;
pub mod screen;

/// Spinner for generation steps. Hidden unless on a human-format, non-quiet
/// terminal so piped output stays clean.
pub(crate) fn spinner(
    output: &OutputManager,
    msg: impl Into<Cow<'static, str>>,
) -> ProgressBar {
    if output.is_quiet() || output.format() != OutputFormat::Human {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg);
    pb
}
