use super::InputArgs;
use crate::reports;
use clap::Args;
use hitori::connectivity;
use hitori::error::HitoriResult;
use hitori::loader;
use hitori::score;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Grid file; negative values mark shaded cells
    pub file: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

pub struct CheckSummary {
    pub row_conflicts: u32,
    pub column_conflicts: u32,
    pub shaded: usize,
    pub adjacent_shaded: bool,
    pub reached: usize,
    pub cells: usize,
}

impl CheckSummary {
    pub fn is_solved(&self) -> bool {
        self.row_conflicts == 0
            && self.column_conflicts == 0
            && !self.adjacent_shaded
            && self.reached == self.cells
    }
}

pub fn run(args: &CheckArgs) -> HitoriResult<bool> {
    info!("🔎 Checking grid: {}", args.file.display());
    let grid = loader::load_from_file(&args.file, &args.input.load_options(true))?;

    let summary = CheckSummary {
        row_conflicts: score::row_conflicts(&grid),
        column_conflicts: score::column_conflicts(&grid),
        shaded: grid.shaded_count(),
        adjacent_shaded: connectivity::has_adjacent_shaded(&grid),
        reached: connectivity::reachable_count(&grid),
        cells: grid.size() * grid.size(),
    };

    reports::print_grid("Input", &grid);
    reports::print_check_report(&summary);

    Ok(summary.is_solved())
}
