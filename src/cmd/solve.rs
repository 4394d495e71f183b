use super::InputArgs;
use crate::reports;
use clap::{ArgMatches, Args};
use hitori::anneal::{Annealer, Progress, ProgressCallback, SolveReport};
use hitori::config::SolverConfig;
use hitori::error::{HitoriError, HitoriResult};
use hitori::grid::Grid;
use hitori::loader;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Puzzle file
    pub file: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: SolverConfig,

    /// JSON file with solver parameters; explicit flags override it
    #[arg(long = "config")]
    pub config_path: Option<PathBuf>,

    /// Number of independent solves
    #[arg(short, long, default_value_t = 1)]
    pub repeat: usize,

    /// Solves to run in parallel
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Render each solved grid
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Print the reports as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger {
    run: usize,
}

impl ProgressCallback for CliLogger {
    fn on_progress(&self, progress: &Progress) -> bool {
        if progress.epoch % 10_000 == 0 {
            debug!(
                "Run {} | Ep {:7} | Score: {} | T: {:.4} | {} trials",
                self.run, progress.epoch, progress.score, progress.temperature, progress.stats.trials
            );
        }
        true
    }
}

fn resolve_config(args: &SolveArgs, matches: Option<&ArgMatches>) -> HitoriResult<SolverConfig> {
    let config = match (&args.config_path, matches) {
        (Some(path), Some(m)) => {
            info!("⚙️  Loading solver config from: {}", path.display());
            let mut file_config = SolverConfig::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, m);
            file_config
        }
        (Some(path), None) => SolverConfig::load_from_file(path)?,
        (None, _) => args.config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn solve_once(grid: &Grid, config: &SolverConfig, seed: Option<u64>, run: usize) -> HitoriResult<SolveReport> {
    let run_seed = seed.map(|s| s.wrapping_add(run as u64));
    let mut annealer = Annealer::with_seed(grid.clone(), config, run_seed)?;
    Ok(annealer.solve(&CliLogger { run: run + 1 }))
}

pub fn run(args: &SolveArgs, matches: Option<&ArgMatches>) -> HitoriResult<bool> {
    let config = resolve_config(args, matches)?;

    info!("📂 Loading puzzle: {}", args.file.display());
    let grid = loader::load_from_file(&args.file, &args.input.load_options(false))?;

    if config.budget.is_unbounded() {
        warn!("No --max-trials or --max-seconds given; the search runs until it finds a solution");
    }

    let repeat = args.repeat.max(1);
    let reports: Vec<SolveReport> = if args.jobs > 1 && repeat > 1 {
        info!("🔥 Running {} solves on {} threads", repeat, args.jobs);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build()
            .map_err(|e| HitoriError::Config(e.to_string()))?;
        pool.install(|| {
            (0..repeat)
                .into_par_iter()
                .map(|i| solve_once(&grid, &config, args.seed, i))
                .collect::<HitoriResult<Vec<_>>>()
        })?
    } else {
        (0..repeat)
            .map(|i| solve_once(&grid, &config, args.seed, i))
            .collect::<HitoriResult<Vec<_>>>()?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if args.show {
                reports::print_grid(&format!("Run {} ({})", i + 1, report.outcome), &report.grid);
            }
            println!("{}:{}ms", i + 1, report.elapsed_ms);
        }
        if reports.len() > 1 {
            reports::print_run_summary(&reports);
        }
    }

    Ok(reports.iter().all(SolveReport::is_solved))
}
