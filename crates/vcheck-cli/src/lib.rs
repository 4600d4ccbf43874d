//! vcheck CLI: runs the verification suites
//!
//! Exit status is 0 when no assertion failed and 1 otherwise; a profile
//! that cannot be loaded is also reported with status 1.

pub mod output;
pub mod profile;

use anyhow::Context;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use profile::Profile;
use std::path::PathBuf;
use vcheck_core::Report;
use vcheck_cost::CostSuite;
use vcheck_template::TemplateSuite;

#[derive(Parser, Debug)]
#[command(name = "vcheck")]
#[command(about = "Verify budget cost arithmetic and configuration templates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Profile file (YAML)
    #[arg(short, long, global = true, env = "VCHECK_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Template to check, overriding the profile
    #[arg(long, global = true, env = "VCHECK_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Budget command to time, overriding the profile
    #[arg(long, global = true, env = "VCHECK_BUDGET_CMD")]
    pub budget_cmd: Option<String>,

    /// Cost-definition source to scan for prices
    #[arg(long, global = true, env = "VCHECK_COST_SOURCE")]
    pub cost_source: Option<PathBuf>,

    /// Skip the budget command latency checks
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, global = true, env = "VCHECK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Cost-model checks
    Cost,
    /// Template-content checks
    Template,
    /// Both suites (default)
    All,
    /// Print the effective profile as YAML
    Profile,
}

impl Cli {
    /// Load the profile and apply command-line overrides
    pub fn effective_profile(&self) -> anyhow::Result<Profile> {
        let mut profile = Profile::load(self.profile.as_deref()).with_context(|| {
            format!(
                "loading profile {}",
                self.profile.as_deref().map(|p| p.display().to_string()).unwrap_or_default()
            )
        })?;

        if let Some(path) = &self.template {
            profile.template.path = path.clone();
        }
        if let Some(cmd) = &self.budget_cmd {
            profile.cost.latency.command = cmd.clone();
        }
        if let Some(source) = &self.cost_source {
            profile.cost.cost_source = source.clone();
        }
        if self.no_latency {
            profile.cost.latency.enabled = false;
        }
        Ok(profile)
    }
}

/// Run the selected suites and return the process exit code
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let profile = cli.effective_profile()?;
    let command = cli.command.unwrap_or(Commands::All);
    tracing::info!(profile = %profile.name, ?command, "starting");

    let reports: Vec<Report> = match command {
        Commands::Profile => {
            print!("{}", profile.to_yaml()?);
            return Ok(0);
        }
        Commands::Cost => vec![CostSuite::new(profile.cost).run()],
        Commands::Template => vec![TemplateSuite::new(profile.template).run()],
        Commands::All => vec![
            CostSuite::new(profile.cost).run(),
            TemplateSuite::new(profile.template).run(),
        ],
    };

    let summary = output::combined(&reports);
    match cli.format {
        OutputFormat::Json => println!("{}", output::render_json(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", output::render_text(report));
            }
            if reports.len() > 1 {
                println!("Overall: {}", output::summary_line(&summary));
            }
        }
    }

    Ok(summary.exit_code())
}
