//! CLI for the PhishGuard URL analyzer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishguard_core::config::{self, PhishguardConfig};

use commands::{
    run_check, run_completions, run_features, run_health, run_interactive, run_man, run_samples,
};

/// Top-level CLI for the PhishGuard URL analyzer.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "PhishGuard: classify URLs with a remote phishing model", long_about = None)]
pub struct Cli {
    /// Prediction API base URL (overrides config and PHISHGUARD_PREDICTOR_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Give up on a request after SECS seconds (default: wait indefinitely).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze one or more URLs with the prediction API.
    Check {
        /// URLs to analyze; `https://` is assumed when no scheme is given.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print reports as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the locally computed URL features without contacting the API.
    Features {
        /// URL to inspect.
        url: String,
        /// Print features as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Check that the prediction API is up and has its model loaded.
    Health,

    /// Read URLs from stdin and analyze them one at a time (`retry`, `quit`).
    Interactive,

    /// List sample URLs to try.
    Samples,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page to stdout.
    Man,
}

impl Cli {
    /// Applies `--endpoint` / `--timeout` on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut PhishguardConfig) {
        if let Some(endpoint) = self.endpoint.as_deref().map(str::trim) {
            if !endpoint.is_empty() {
                cfg.predictor_url = endpoint.to_string();
            }
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = Some(secs);
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        cli.apply_overrides(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { urls, json } => run_check(&cfg, &urls, json).await?,
            CliCommand::Features { url, json } => run_features(&url, json)?,
            CliCommand::Health => run_health(&cfg).await?,
            CliCommand::Interactive => run_interactive(&cfg).await?,
            CliCommand::Samples => run_samples(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
