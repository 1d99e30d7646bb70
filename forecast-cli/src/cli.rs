use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use forecast_core::{Config, Dashboard, generator};
use inquire::{Confirm, CustomUserError, Text, validator::Validation};
use std::num::ParseIntError;

use crate::{
    browse,
    render::{self, RenderOptions},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Mock 7-day weather dashboard")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the dashboard once.
    Show {
        /// Day offset to select, 0 = today, 6 = six days ago. Out-of-range values are ignored.
        #[arg(long, allow_negative_numbers = true)]
        day: Option<i64>,

        /// Seed for the mock data; overrides the configured seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the view model as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// ASCII icon names instead of glyphs.
        #[arg(long)]
        plain: bool,
    },

    /// Step through the days interactively.
    Browse {
        /// Seed for the mock data; overrides the configured seed.
        #[arg(long)]
        seed: Option<u64>,

        /// ASCII icon names instead of glyphs.
        #[arg(long)]
        plain: bool,
    },

    /// Set default seed and display options.
    Configure,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Show { day, seed, json, plain } => show(&config, day, seed, json, plain),
            Command::Browse { seed, plain } => {
                let rng = generator::seeded_or_random(config.effective_seed(seed));
                let dashboard = Dashboard::new(rng, Local::now().date_naive());
                browse::run(dashboard, render_options(&config, plain))
            }
            Command::Configure => configure(config),
        }
    }
}

fn render_options(config: &Config, plain: bool) -> RenderOptions {
    RenderOptions {
        plain: plain || config.plain_icons,
        show_hourly: config.show_hourly,
    }
}

fn show(
    config: &Config,
    day: Option<i64>,
    seed: Option<u64>,
    json: bool,
    plain: bool,
) -> anyhow::Result<()> {
    let rng = generator::seeded_or_random(config.effective_seed(seed));
    let mut dashboard = Dashboard::new(rng, Local::now().date_naive());

    // negative offsets are out of range like any other
    if let Some(index) = day.and_then(|d| usize::try_from(d).ok()) {
        dashboard.select_index(index);
    }

    let view = dashboard.view();
    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view to JSON")?;
        println!("{out}");
    } else {
        println!("{}", render::render(&view, render_options(config, plain)));
    }

    Ok(())
}

/// Empty input means "no seed".
fn parse_seed(input: &str) -> Result<Option<u64>, ParseIntError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

fn validate_seed(input: &str) -> Result<Validation, CustomUserError> {
    Ok(match parse_seed(input) {
        Ok(_) => Validation::Valid,
        Err(_) => Validation::Invalid("Enter a non-negative integer, or clear the field".into()),
    })
}

/// A skipped prompt keeps the stored seed; an answer replaces it.
fn resolve_seed(current: Option<u64>, answer: Option<&str>) -> Option<u64> {
    match answer {
        Some(input) => parse_seed(input).unwrap_or(current),
        None => current,
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.seed.map(|seed| seed.to_string()).unwrap_or_default();
    let answer = Text::new("Default seed:")
        .with_initial_value(&current)
        .with_help_message("empty = new random data each run, Esc keeps the current seed")
        .with_validator(validate_seed)
        .prompt_skippable()
        .context("Failed to read seed")?;

    let show_hourly = Confirm::new("Show the hourly forecast strip?")
        .with_default(config.show_hourly)
        .prompt()
        .context("Failed to read hourly strip choice")?;

    let plain_icons = Confirm::new("Use plain ASCII icon names?")
        .with_default(config.plain_icons)
        .prompt()
        .context("Failed to read icon choice")?;

    config.seed = resolve_seed(config.seed, answer.as_deref());
    config.show_hourly = show_hourly;
    config.plain_icons = plain_icons;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
