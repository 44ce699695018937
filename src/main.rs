//! file-tags CLI application entry point
//!
//! Adds or removes tags stored in file names across a batch of files.
//!
//! # Usage
//!
//! ```bash
//! # Add two tags to some pictures
//! file-tags add flowers,wallpaper 'Picture 002.jpg' 'Picture 003.jpg'
//!
//! # Only show what would change
//! file-tags add "flying whales" *.jpg --no-action
//!
//! # Remove a tag, asking first
//! file-tags rm wallpaper *.jpg -i
//! ```
//!
//! # Configuration
//!
//! Defaults for `quiet`, `interactive` and `preview_limit` are read from
//! `~/.config/file-tags/config.toml` on Linux when it exists. Diagnostics are
//! controlled with `FILE_TAGS_LOG` (e.g. `FILE_TAGS_LOG=debug`).

use std::process::ExitCode;

use file_tags::{
    BatchError, CancelFlag, EXIT_OK, FileTagsError,
    cli::{Cli, Settings},
    commands::{self, TagRequest},
    config::FileTagsConfig,
    output::{Reporter, TerminalReporter},
    ui::DialoguerInput,
};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FILE_TAGS_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn install_interrupt_handler(cancel: &CancelFlag) {
    let cancel = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        tracing::warn!("Failed to install interrupt handler: {e}");
    }
}

fn load_config(cli: &Cli) -> Result<FileTagsConfig, FileTagsError> {
    let config = match &cli.config {
        Some(path) => FileTagsConfig::load_from(path)?,
        None => FileTagsConfig::load()?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn run(
    cli: &Cli,
    settings: &Settings,
    reporter: &mut dyn Reporter,
    cancel: &CancelFlag,
) -> Result<(), FileTagsError> {
    let request = TagRequest::from_cli(cli, settings)?;
    let outcome = commands::tag(&request, reporter, &DialoguerInput::new(), cancel)?;
    tracing::debug!(?outcome, "finished");
    Ok(())
}

fn report_error(reporter: &mut dyn Reporter, err: &FileTagsError) {
    match err {
        FileTagsError::Declined => {}
        FileTagsError::Interrupted => reporter.info("Interrupted by the user, exiting ..."),
        FileTagsError::Batch(batch @ BatchError::Interrupted { .. }) => {
            reporter.warning(&batch.to_string());
            reporter.info("Interrupted by the user, exiting ...");
        }
        FileTagsError::Batch(batch @ BatchError::Rename { .. }) => {
            reporter.error(&batch.to_string());
            reporter.error("Exiting ... (failed to rename a file, please retry)");
        }
        other => reporter.error(&other.to_string()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let cancel = CancelFlag::new();
    install_interrupt_handler(&cancel);

    let (mut reporter, result) = match load_config(&cli) {
        Ok(config) => {
            let settings = cli.settings(&config);
            let mut reporter = TerminalReporter::new(settings.quiet);
            let result = run(&cli, &settings, &mut reporter, &cancel);
            (reporter, result)
        }
        Err(err) => (TerminalReporter::new(cli.quiet), Err(err)),
    };

    let code = match result {
        Ok(()) => EXIT_OK,
        Err(err) => {
            tracing::debug!(error = ?err, "invocation failed");
            report_error(&mut reporter, &err);
            err.exit_code()
        }
    };

    reporter.flush();
    ExitCode::from(code)
}
