use thiserror::Error;

#[derive(Error, Debug)]
pub enum HitoriError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse Error on line {line}: invalid value '{token}'")]
    Parse { line: usize, token: String },

    #[error("Shape Error on line {line}: expected {expected} values, found {found}")]
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Shape Error: expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("Shape Error: grid is not square")]
    NonSquare,

    #[error("Shape Error: grid is empty")]
    Empty,

    #[error("Starting grid breaks the adjacency or connectivity rule")]
    InfeasibleStart,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Cannot sample a move: no cell shares a value with its row or column")]
    EmptyCandidates,
}

pub type HitoriResult<T> = Result<T, HitoriError>;
