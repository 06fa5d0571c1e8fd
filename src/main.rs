//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use ffl_scoring::{
    cli::{Commands, FflScoring},
    commands::{
        compare::{handle_compare, CompareParams},
        players::handle_players,
        positions::handle_positions,
        resolve_profile,
    },
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = FflScoring::parse();
    let mut stdout = std::io::stdout();

    match app.command {
        Commands::Players { common } => {
            let profile = resolve_profile(&common.profile, common.profile_file.as_deref())?;
            handle_players(
                &mut stdout,
                &common.input,
                &common.season,
                &profile,
                common.json,
            )?;
        }

        Commands::Positions { common, top_n } => {
            let profile = resolve_profile(&common.profile, common.profile_file.as_deref())?;
            handle_positions(
                &mut stdout,
                &common.input,
                &common.season,
                &profile,
                top_n,
                common.json,
            )?;
        }

        Commands::Compare {
            input,
            season,
            top_n,
            json,
            chart_dir,
        } => {
            handle_compare(
                &mut stdout,
                &CompareParams {
                    input,
                    seasons: season,
                    thresholds: top_n,
                    as_json: json,
                    chart_dir,
                },
            )?;
        }
    }

    Ok(())
}
