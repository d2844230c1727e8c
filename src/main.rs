#![forbid(unsafe_code)]

use std::{fs::File, sync::Mutex};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app_data::AppData;
use docker_data::{CliRunner, DockerData};
use input_handler::InputHandler;
use parse_args::CliArgs;
use ui::{layout::DEFAULT_SIZE, Theme, Ui};

mod app_data;
mod app_error;
mod docker_data;
mod input_handler;
mod parse_args;
mod ui;

/// Tracing can only go to a file, anything written to stdout or stderr would corrupt the tui
fn setup_tracing(args: &CliArgs) -> anyhow::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("unable to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log level `{}`", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args = CliArgs::new();
    setup_tracing(&args)?;

    let theme = if args.monochrome {
        Theme::monochrome()
    } else {
        Theme::default()
    };
    let size = crossterm::terminal::size().unwrap_or(DEFAULT_SIZE);
    info!(bin = %args.bin, width = size.0, height = size.1, "starting");

    let docker = DockerData::new(CliRunner::new(&args.bin));
    let mut input_handler = InputHandler::init(AppData::default(args), docker, size);
    Ui::create(&mut input_handler, theme)?;
    info!("quit");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
        std::process::exit(1);
    }
}
