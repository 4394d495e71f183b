use crate::candidates::CandidateSet;
use crate::config::{AcceptanceRule, AnnealParams, BudgetParams, MoveStrategy, SolverConfig};
use crate::connectivity;
use crate::error::{HitoriError, HitoriResult};
use crate::grid::Grid;
use crate::moves::{self, Move};
use crate::score;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum::Display;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SolveOutcome {
    Solved,
    /// The trial or time budget ran out before the score reached zero.
    BudgetExhausted,
    /// A progress callback asked the search to stop.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// No eligible toggle was found within the resample limit.
    NoMove,
    /// The acceptance rule turned the move down.
    Rejected,
    /// The move was accepted but would disconnect the kept cells.
    Infeasible,
    Accepted(Move),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialStats {
    pub trials: u64,
    pub accepted: u64,
    pub rejected: u64,
    /// Trials that found no move or whose move was infeasible.
    pub noop: u64,
}

/// Snapshot handed to a [`ProgressCallback`] after every epoch.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub epoch: u64,
    pub score: u32,
    pub temperature: f64,
    pub resets: u64,
    pub stats: TrialStats,
    pub elapsed: Duration,
}

/// Receives updates during annealing.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, progress: &Progress) -> bool;
}

impl<F> ProgressCallback for F
where
    F: Fn(&Progress) -> bool + Send + Sync,
{
    fn on_progress(&self, progress: &Progress) -> bool {
        self(progress)
    }
}

/// Callback that never interrupts the search.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _progress: &Progress) -> bool {
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub grid: Grid,
    pub score: u32,
    pub stats: TrialStats,
    pub epochs: u64,
    pub resets: u64,
    pub elapsed_ms: u64,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }
}

/// Simulated annealing over shadings of a single grid.
pub struct Annealer {
    params: AnnealParams,
    budget: BudgetParams,
    candidates: CandidateSet,
    grid: Grid,
    scratch: Grid,
    score: u32,
    rng: Rng,
    stats: TrialStats,
}

impl Annealer {
    pub fn new(grid: Grid, config: &SolverConfig, rng: Rng) -> HitoriResult<Self> {
        config.validate()?;
        if !connectivity::is_feasible(&grid) {
            return Err(HitoriError::InfeasibleStart);
        }

        let candidates = CandidateSet::from_grid(&grid);
        let score = score::full_score(&grid);
        let scratch = grid.clone();

        Ok(Self {
            params: config.anneal.clone(),
            budget: config.budget.clone(),
            candidates,
            grid,
            scratch,
            score,
            rng,
            stats: TrialStats::default(),
        })
    }

    pub fn with_seed(grid: Grid, config: &SolverConfig, seed: Option<u64>) -> HitoriResult<Self> {
        let rng = if let Some(s) = seed {
            Rng::with_seed(s)
        } else {
            Rng::new()
        };
        Self::new(grid, config, rng)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn stats(&self) -> TrialStats {
        self.stats
    }

    /// Runs one trial at `temperature` and commits the move if it survives.
    pub fn trial(&mut self, temperature: f64) -> TrialOutcome {
        self.stats.trials += 1;
        self.scratch.clone_from(&self.grid);

        let proposed = moves::propose(
            &mut self.scratch,
            &self.candidates,
            self.params.strategy,
            self.params.max_resamples,
            &mut self.rng,
        );
        let Some(mv) = proposed else {
            self.stats.noop += 1;
            return TrialOutcome::NoMove;
        };

        if !self.accepts(mv.delta, temperature) {
            self.stats.rejected += 1;
            return TrialOutcome::Rejected;
        }

        // Connectivity is only checked once the cheaper score test has passed.
        if self.params.strategy == MoveStrategy::ScoreDelta
            && !connectivity::is_feasible(&self.scratch)
        {
            self.stats.noop += 1;
            return TrialOutcome::Infeasible;
        }

        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.score = u32::try_from(self.score as i64 + mv.delta).unwrap_or(0);
        self.stats.accepted += 1;
        debug_assert_eq!(self.score, score::full_score(&self.grid));

        TrialOutcome::Accepted(mv)
    }

    fn accepts(&mut self, delta: i64, temperature: f64) -> bool {
        if delta <= 0 {
            return true;
        }
        let p = 1.0 / (1.0 + (delta as f64 / temperature).exp());
        match self.params.acceptance {
            AcceptanceRule::Metropolis => self.rng.f64() < p,
            AcceptanceRule::LegacyPercent => (self.rng.u32(0..100) as f64) < p,
        }
    }

    fn trials_exhausted(&self) -> bool {
        self.budget
            .max_trials
            .is_some_and(|limit| self.stats.trials >= limit)
    }

    /// Anneals until the score reaches zero, the budget runs out, or the
    /// callback cancels.
    pub fn solve<CB: ProgressCallback + ?Sized>(&mut self, callback: &CB) -> SolveReport {
        let start = Instant::now();
        let time_limit = self.budget.time_limit();
        let mut temperature = self.params.temperature;
        let mut epochs = 0u64;
        let mut resets = 0u64;

        if self.score == 0 {
            info!("Grid has no conflicts, nothing to anneal");
            return self.report(SolveOutcome::Solved, epochs, resets, start);
        }

        info!(
            "Annealing {}x{} grid: score {}, {} candidate cells, strategy {}",
            self.grid.size(),
            self.grid.size(),
            self.score,
            self.candidates.len(),
            self.params.strategy,
        );

        let mut last_reset = Instant::now();
        let mut trials_at_reset = 0u64;

        loop {
            if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                return self.finish_exhausted(epochs, resets, start);
            }

            for _ in 0..self.params.trials_per_epoch {
                if self.trials_exhausted() {
                    return self.finish_exhausted(epochs, resets, start);
                }
                self.trial(temperature);
                if self.score == 0 {
                    info!(
                        "Solved after {} trials ({} accepted) in {:.2?}",
                        self.stats.trials,
                        self.stats.accepted,
                        start.elapsed()
                    );
                    return self.report(SolveOutcome::Solved, epochs, resets, start);
                }
            }

            epochs += 1;
            temperature *= self.params.decay;

            if temperature < self.params.reset_below {
                temperature = self.params.reset_temperature;
                resets += 1;

                let window = last_reset.elapsed();
                let trials = self.stats.trials - trials_at_reset;
                let rate = trials as f64 / window.as_secs_f64().max(1e-9);
                info!(
                    "Reheat #{} | Score: {} | Trials: {} | Time: {}ms | {:.0} trials/s",
                    resets,
                    self.score,
                    trials,
                    window.as_millis(),
                    rate
                );
                last_reset = Instant::now();
                trials_at_reset = self.stats.trials;
            }

            let progress = Progress {
                epoch: epochs,
                score: self.score,
                temperature,
                resets,
                stats: self.stats,
                elapsed: start.elapsed(),
            };
            if !callback.on_progress(&progress) {
                debug!("Search cancelled at epoch {}", epochs);
                return self.report(SolveOutcome::Cancelled, epochs, resets, start);
            }
        }
    }

    fn finish_exhausted(&self, epochs: u64, resets: u64, start: Instant) -> SolveReport {
        info!(
            "Budget exhausted after {} trials, best score {}",
            self.stats.trials, self.score
        );
        self.report(SolveOutcome::BudgetExhausted, epochs, resets, start)
    }

    fn report(&self, outcome: SolveOutcome, epochs: u64, resets: u64, start: Instant) -> SolveReport {
        SolveReport {
            outcome,
            grid: self.grid.clone(),
            score: self.score,
            stats: self.stats,
            epochs,
            resets,
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }
}
