use crate::cmd::check::CheckSummary;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hitori::anneal::{SolveOutcome, SolveReport};
use hitori::grid::{Cell as GridCell, Grid};

/// Bordered grid; shaded cells are black on red.
pub fn print_grid(name: &str, grid: &Grid) {
    println!("\nGrid: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for r in 0..grid.size() {
        let cells: Vec<Cell> = grid
            .row(r)
            .iter()
            .map(|cell| match *cell {
                GridCell::Kept(v) => Cell::new(v).set_alignment(CellAlignment::Right),
                GridCell::Shaded(v) => Cell::new(v)
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Black)
                    .bg(Color::Red),
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

fn outcome_cell(outcome: SolveOutcome) -> Cell {
    let color = match outcome {
        SolveOutcome::Solved => Color::Green,
        SolveOutcome::BudgetExhausted => Color::Yellow,
        SolveOutcome::Cancelled => Color::Red,
    };
    Cell::new(outcome).fg(color)
}

pub fn print_run_summary(reports: &[SolveReport]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Run").add_attribute(Attribute::Bold),
        Cell::new("Outcome"),
        Cell::new("Score"),
        Cell::new("Trials"),
        Cell::new("Accepted"),
        Cell::new("No-op"),
        Cell::new("Reheats"),
        Cell::new("ms").fg(Color::Cyan),
    ]);

    for i in 2..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, r) in reports.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Bold),
            outcome_cell(r.outcome),
            Cell::new(r.score),
            Cell::new(r.stats.trials),
            Cell::new(r.stats.accepted),
            Cell::new(r.stats.noop),
            Cell::new(r.resets),
            Cell::new(r.elapsed_ms).fg(Color::Cyan),
        ]);
    }

    let solved: Vec<&SolveReport> = reports.iter().filter(|r| r.is_solved()).collect();
    if !solved.is_empty() {
        let mean_ms =
            solved.iter().map(|r| r.elapsed_ms as f64).sum::<f64>() / solved.len() as f64;
        println!(
            "\nSolved {}/{} runs, mean {:.0}ms per solved run",
            solved.len(),
            reports.len(),
            mean_ms
        );
    } else {
        println!("\nSolved 0/{} runs", reports.len());
    }
    println!("{}", table);
}

pub fn print_check_report(s: &CheckSummary) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let flag = |ok: bool| {
        if ok {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("FAIL").fg(Color::Red)
        }
    };

    table.add_row(vec![
        Cell::new("Row conflicts"),
        Cell::new(s.row_conflicts),
        flag(s.row_conflicts == 0),
    ]);
    table.add_row(vec![
        Cell::new("Column conflicts"),
        Cell::new(s.column_conflicts),
        flag(s.column_conflicts == 0),
    ]);
    table.add_row(vec![
        Cell::new("Adjacent shaded cells"),
        Cell::new(if s.adjacent_shaded { "yes" } else { "no" }),
        flag(!s.adjacent_shaded),
    ]);
    table.add_row(vec![
        Cell::new("Reached cells"),
        Cell::new(format!("{}/{}", s.reached, s.cells)),
        flag(s.reached == s.cells),
    ]);
    table.add_row(vec![
        Cell::new("Shaded cells"),
        Cell::new(s.shaded),
        Cell::new(""),
    ]);
    println!("{}", table);

    if s.is_solved() {
        println!("Verdict: SOLVED");
    } else {
        println!("Verdict: NOT SOLVED");
    }
}
