use crate::error::{HitoriError, HitoriResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use strum::Display;

/// How the move generator treats connectivity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MoveStrategy {
    /// Score the toggle first, check connectivity only once the move is accepted.
    #[default]
    ScoreDelta,
    /// Check connectivity right after each toggle and resample until feasible.
    ImmediateValidate,
}

/// Comparison used when an uphill move is considered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AcceptanceRule {
    /// `uniform[0,1) < p`
    #[default]
    Metropolis,
    /// `uniform_int[0,100) < p`, which accepts roughly 1% of uphill moves at any temperature.
    LegacyPercent,
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    #[command(flatten)]
    #[serde(default)]
    pub anneal: AnnealParams,
    #[command(flatten)]
    #[serde(default)]
    pub budget: BudgetParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealParams {
    /// Starting temperature
    #[arg(long, default_value_t = 100.0)]
    pub temperature: f64,

    /// Multiplier applied to the temperature after every epoch, in (0, 1)
    #[arg(long, default_value_t = 0.9992)]
    pub decay: f64,

    #[arg(long, default_value_t = 200)]
    pub trials_per_epoch: usize,

    /// Reheat once the temperature falls below this value
    #[arg(long, default_value_t = 0.000001)]
    pub reset_below: f64,

    #[arg(long, default_value_t = 50.0)]
    pub reset_temperature: f64,

    #[arg(long, value_enum, default_value_t = MoveStrategy::ScoreDelta)]
    pub strategy: MoveStrategy,

    #[arg(long, value_enum, default_value_t = AcceptanceRule::Metropolis)]
    pub acceptance: AcceptanceRule,

    /// Draws allowed per trial before the trial is abandoned
    #[arg(long, default_value_t = 10_000)]
    pub max_resamples: usize,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            temperature: 100.0,
            decay: 0.9992,
            trials_per_epoch: 200,
            reset_below: 0.000001,
            reset_temperature: 50.0,
            strategy: MoveStrategy::ScoreDelta,
            acceptance: AcceptanceRule::Metropolis,
            max_resamples: 10_000,
        }
    }
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetParams {
    /// Stop after this many trials (unbounded when absent)
    #[arg(long)]
    pub max_trials: Option<u64>,

    /// Stop after this many seconds of search (unbounded when absent)
    #[arg(long)]
    pub max_seconds: Option<f64>,
}

impl BudgetParams {
    /// `None` when unbounded or when `max_seconds` does not fit a `Duration`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.max_seconds
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_trials.is_none() && self.max_seconds.is_none()
    }
}

impl SolverConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HitoriResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: SolverConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies every parameter the user typed on the command line over the
    /// values loaded from a file.
    pub fn merge_from_cli(&mut self, cli: &SolverConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(anneal.temperature);
        update_if_present!(anneal.decay);
        update_if_present!(anneal.trials_per_epoch);
        update_if_present!(anneal.reset_below);
        update_if_present!(anneal.reset_temperature);
        update_if_present!(anneal.strategy);
        update_if_present!(anneal.acceptance);
        update_if_present!(anneal.max_resamples);

        update_if_present!(budget.max_trials);
        update_if_present!(budget.max_seconds);
    }

    pub fn validate(&self) -> HitoriResult<()> {
        let a = &self.anneal;
        if !(a.temperature > 0.0) || !a.temperature.is_finite() {
            return Err(HitoriError::Config(format!(
                "temperature must be positive, got {}",
                a.temperature
            )));
        }
        if !(a.decay > 0.0 && a.decay < 1.0) {
            return Err(HitoriError::Config(format!(
                "decay must lie in (0, 1), got {}",
                a.decay
            )));
        }
        if a.trials_per_epoch == 0 {
            return Err(HitoriError::Config(
                "trials_per_epoch must be at least 1".to_string(),
            ));
        }
        if !(a.reset_below > 0.0) {
            return Err(HitoriError::Config(format!(
                "reset_below must be positive, got {}",
                a.reset_below
            )));
        }
        if !(a.reset_temperature > a.reset_below) || !a.reset_temperature.is_finite() {
            return Err(HitoriError::Config(format!(
                "reset_temperature ({}) must exceed reset_below ({})",
                a.reset_temperature, a.reset_below
            )));
        }
        if a.max_resamples == 0 {
            return Err(HitoriError::Config(
                "max_resamples must be at least 1".to_string(),
            ));
        }
        if let Some(secs) = self.budget.max_seconds {
            Duration::try_from_secs_f64(secs).map_err(|e| {
                HitoriError::Config(format!(
                    "max_seconds {} is not a usable duration: {}",
                    secs, e
                ))
            })?;
        }
        Ok(())
    }
}
