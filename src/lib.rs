pub mod anneal;
pub mod candidates;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod grid;
pub mod loader;
pub mod moves;
pub mod score;
// cmd and reports belong to the binary (main.rs).

pub use anneal::{Annealer, SolveOutcome, SolveReport};
pub use error::{HitoriError, HitoriResult};
pub use grid::{Cell, Grid};
