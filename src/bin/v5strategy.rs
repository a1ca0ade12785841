//! Drive every strategy entry point once from payload files.
//!
//! ```text
//! v5strategy [--config host.yaml] [--event CODE] [--version CODE] [--yellow] <field.yaml>
//! ```
//!
//! Set `RUST_LOG` to adjust verbosity (default `info`).

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use v5strategy::payload::{RawEventArguments, RawField};
use v5strategy::{HostConfig, StrategyHost};

#[derive(Parser, Debug)]
#[command(name = "v5strategy")]
#[command(about = "Drive the demo strategy through every callback entry point", long_about = None)]
struct Cli {
    /// Host configuration YAML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event code delivered to on_event
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    event: i32,

    /// Server RPC version code passed to get_team_info
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    version: i32,

    /// Play as the yellow side: mirror coordinates for the strategy
    #[arg(long)]
    yellow: bool,

    /// Field payload (YAML or JSON)
    field: PathBuf,
}

impl Cli {
    /// Configuration file (or defaults) with the command-line switches applied.
    fn host_config(&self) -> Result<HostConfig> {
        let mut config = match &self.config {
            Some(path) => HostConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => HostConfig::default(),
        };
        if self.yellow {
            config.reverse_coordinates = true;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.host_config()?;

    let text = std::fs::read_to_string(&cli.field)
        .with_context(|| format!("failed to read field payload {}", cli.field.display()))?;
    let field = RawField::from_yaml(&text).context("field payload is not valid YAML")?;

    let mut host = StrategyHost::demo(config);

    if let Some(team) = host.get_team_info(cli.version) {
        info!(team_name = %team.team_name, reverse = host.config().reverse_coordinates, "Team info");
    }
    host.on_event(cli.event, &RawEventArguments::default());

    if let Some(instruction) = host.get_instruction(&field) {
        println!("instruction: {:?} control_info={}", instruction.pairs(), instruction.control_info);
    }
    if let Some(placement) = host.get_placement(&field) {
        println!("placement: {:?}", placement.triples());
    }

    for entry in host.visible_log() {
        println!("{entry}");
    }

    if let Some(err) = host.last_error() {
        bail!("a callback failed: {err}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_drive_match_start_on_v1_1() {
        let cli = Cli::try_parse_from(["v5strategy", "field.yaml"]).unwrap();
        assert_eq!(cli.event, 1);
        assert_eq!(cli.version, 1);
        assert_eq!(cli.field, PathBuf::from("field.yaml"));
        assert!(cli.config.is_none());

        let config = cli.host_config().unwrap();
        assert_eq!(config, HostConfig::default());
        assert!(!config.reverse_coordinates);
    }

    #[test]
    fn yellow_switch_enables_reverse_coordinates() {
        let cli = Cli::try_parse_from(["v5strategy", "--yellow", "--event", "0", "field.yaml"]).unwrap();
        assert!(cli.yellow);
        assert_eq!(cli.event, 0);
        assert!(cli.host_config().unwrap().reverse_coordinates);
    }

    #[test]
    fn negative_codes_are_accepted_as_values() {
        let cli = Cli::try_parse_from(["v5strategy", "--version", "-3", "field.yaml"]).unwrap();
        assert_eq!(cli.version, -3);
    }

    #[test]
    fn field_path_is_required() {
        let err = Cli::try_parse_from(["v5strategy", "--yellow"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unreadable_config_is_reported() {
        let cli = Cli::try_parse_from([
            "v5strategy",
            "--config",
            "/nonexistent/host.yaml",
            "field.yaml",
        ])
        .unwrap();
        let err = cli.host_config().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/host.yaml"));
    }
}
