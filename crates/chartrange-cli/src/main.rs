mod app;
mod cli;
mod commands;

use anyhow::Result;
use chartrange_core::SortDirection;
use clap::Parser;
use cli::{Args, Command};
use commands::show::ShowOptions;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chartrange=warn,chartrange_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = app::load_config(&args);

    match args.command {
        Some(Command::Show {
            sort,
            asc,
            desc,
            display,
            only,
        }) => {
            let direction = match (asc, desc) {
                (true, _) => Some(SortDirection::Ascending),
                (_, true) => Some(SortDirection::Descending),
                _ => None,
            };
            commands::show::run(
                &config,
                ShowOptions {
                    sort,
                    direction,
                    display,
                    only,
                },
            )
        }
        Some(Command::Export { output, format }) => {
            commands::export::run(&config, output.as_deref(), format)
        }
        Some(Command::Interactive) | None => commands::interactive::run(&config),
    }
}
