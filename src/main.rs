//! quickpeek - Native quick preview of downloaded files.
//!
//! Usage:
//!   quickpeek FILE...              Preview files with the platform viewer
//!   quickpeek --headless FILE...   Record what would be shown, print JSON
//!   quickpeek --help               Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use serde::Serialize;

use quickpeek_core::headless::{HeadlessHost, RecordingSurface};
use quickpeek_core::{
    MissingContextPolicy, PresenterConfig, PreviewPresenter, PreviewSession,
    PreviewSurface, PreviewWarning, PresentationHost,
};
use quickpeek_system::{AttachMode, SystemHost, SystemSurface, Viewer};

#[derive(Parser)]
#[command(
    name = "quickpeek",
    version,
    about = "Preview files with the platform's native previewer",
    long_about = "quickpeek makes each file readable and hands it to the native \
                  preview surface. When several files are given, the last one wins."
)]
struct Cli {
    /// Files to preview, in order
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Presenter config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when no presentation context is available
    #[arg(long)]
    strict: bool,

    /// Do not change file permissions before previewing
    #[arg(long)]
    no_chmod: bool,

    /// Permission mode to apply, in octal (e.g. 644)
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<u32>,

    /// Record the preview instead of opening a viewer, print a JSON report
    #[arg(long)]
    headless: bool,

    /// Custom viewer command; the file path is appended
    #[arg(long)]
    viewer: Option<String>,

    /// Present even when no display is detected
    #[arg(long)]
    force: bool,
}

#[derive(Serialize)]
struct RequestReport {
    path: PathBuf,
    presented: bool,
    warnings: Vec<PreviewWarning>,
}

#[derive(Serialize)]
struct HeadlessReport {
    session: PreviewSession,
    surface: RecordingSurface,
    host: HeadlessHost,
    requests: Vec<RequestReport>,
}

fn parse_mode(value: &str) -> Result<u32, String> {
    let digits = value.trim_start_matches("0o");
    u32::from_str_radix(digits, 8).map_err(|e| format!("invalid octal mode '{value}': {e}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(?config, "loaded presenter config");

    if cli.headless {
        let mut presenter = PreviewPresenter::with_config(
            PreviewSession::new(),
            RecordingSurface::new(),
            HeadlessHost::attached(),
            config,
        );
        let requests = present_all(&mut presenter, &cli.paths)?;
        let (session, surface, host) = presenter.into_parts();
        let report = HeadlessReport {
            session,
            surface,
            host,
            requests,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let surface = match cli.viewer.clone() {
            Some(command) => SystemSurface::new(Viewer::Command(command)),
            None => SystemSurface::detect(),
        };
        let mode = if cli.force {
            AttachMode::Always
        } else {
            AttachMode::Auto
        };
        let mut presenter = PreviewPresenter::with_config(
            PreviewSession::new(),
            surface,
            SystemHost::new(mode),
            config,
        );
        let requests = present_all(&mut presenter, &cli.paths)?;
        let hint = match presenter.host().mode() {
            AttachMode::Auto => " (use --force to present anyway)",
            AttachMode::Always => "",
        };
        for request in requests.iter().filter(|r| !r.presented) {
            eprintln!("Not presented (no display): {}{hint}", request.path.display());
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<PresenterConfig> {
    let mut config = match &cli.config {
        Some(path) => PresenterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match PresenterConfig::default_path().filter(|path| path.is_file()) {
            Some(path) => PresenterConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PresenterConfig::default(),
        },
    };

    if cli.strict {
        config = config.with_missing_context(MissingContextPolicy::Error);
    }
    if cli.no_chmod {
        config = config.with_adjust_permissions(false);
    }
    if let Some(mode) = cli.mode {
        config = config.with_permission_mode(mode);
        config.validate()?;
    }

    Ok(config)
}

fn present_all<S, H>(
    presenter: &mut PreviewPresenter<S, H>,
    paths: &[PathBuf],
) -> Result<Vec<RequestReport>>
where
    S: PreviewSurface,
    H: PresentationHost,
{
    let mut requests = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = presenter
            .present(path)
            .with_context(|| format!("Failed to preview {}", path.display()))?;
        let presented = outcome.is_presented();
        let warnings = outcome.into_warnings();
        requests.push(RequestReport {
            path: path.clone(),
            presented,
            warnings,
        });
    }
    Ok(requests)
}
