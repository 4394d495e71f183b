use crate::error::{HitoriError, HitoriResult};
use crate::grid::Grid;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use strum::Display;
use tracing::debug;

/// Text layout of a puzzle file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GridFormat {
    /// Whitespace separated integers, one row per line.
    #[default]
    Tokens,
    /// One digit per character, one row per line.
    Digits,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub format: GridFormat,
    /// Required side length. Taken from the first row when absent.
    pub size: Option<usize>,
    /// Accept negative values as already shaded cells.
    pub allow_shaded: bool,
}

pub fn load_from_file<P: AsRef<Path>>(path: P, opts: &LoadOptions) -> HitoriResult<Grid> {
    let path = path.as_ref();
    debug!("Loading grid from: {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file, opts)
}

pub fn load_from_reader<R: Read>(reader: R, opts: &LoadOptions) -> HitoriResult<Grid> {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    let mut expected = opts.size;

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row = match opts.format {
            GridFormat::Tokens => parse_tokens(&line, line_no)?,
            GridFormat::Digits => parse_digits(&line, line_no)?,
        };

        for &value in &row {
            let out_of_range = value.unsigned_abs() > u64::from(u32::MAX);
            if value == 0 || out_of_range || (value < 0 && !opts.allow_shaded) {
                return Err(HitoriError::Parse {
                    line: line_no,
                    token: value.to_string(),
                });
            }
        }

        let width = *expected.get_or_insert(row.len());
        if row.len() != width {
            return Err(HitoriError::Shape {
                line: line_no,
                expected: width,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(HitoriError::Empty);
    }
    if let Some(n) = expected {
        if rows.len() != n {
            return Err(HitoriError::RowCount {
                expected: n,
                found: rows.len(),
            });
        }
    }

    debug!("Loaded {}x{} grid", rows.len(), rows.len());
    Grid::from_signed_rows(rows)
}

fn parse_tokens(line: &str, line_no: usize) -> HitoriResult<Vec<i64>> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<i64>().map_err(|_| HitoriError::Parse {
                line: line_no,
                token: tok.to_string(),
            })
        })
        .collect()
}

fn parse_digits(line: &str, line_no: usize) -> HitoriResult<Vec<i64>> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(10)
                .map(i64::from)
                .ok_or_else(|| HitoriError::Parse {
                    line: line_no,
                    token: c.to_string(),
                })
        })
        .collect()
}
