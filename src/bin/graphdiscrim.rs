// src/bin/graphdiscrim.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use graphdiscrim_core::cli::{self, Cli, Commands, ExportArgs, StatArgs};
use graphdiscrim_core::config::Config;
use graphdiscrim_core::exit::DiscrimExit;

fn main() -> DiscrimExit {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(&cli) {
        Ok(()) => DiscrimExit::Success,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            DiscrimExit::from_error(&e)
        }
    }
}

fn init_tracing(level: &str) {
    let filter = level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load();
    config.validate()?;
    dispatch(&cli.command, &config)
}

fn dispatch(cmd: &Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Stat {
            dirs,
            no_ptr,
            keep_singletons,
            detail,
        } => {
            let args = StatArgs {
                dirs: dirs.clone(),
                no_ptr: *no_ptr,
                keep_singletons: *keep_singletons,
                detail: *detail,
            };
            cli::handle_stat(&args, config)
        }
        Commands::Export {
            dir,
            out,
            name,
            no_ptr,
        } => {
            let args = ExportArgs {
                dir: dir.clone(),
                out: out.clone(),
                name: name.clone(),
                no_ptr: *no_ptr,
            };
            cli::handle_export(&args, config)
        }
        Commands::Vertices { dir } => cli::handle_vertices(dir, config),
    }
}
