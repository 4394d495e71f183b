pub mod check;
pub mod solve;

use clap::Args;
use hitori::loader::{GridFormat, LoadOptions};

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Side length the file must have (inferred from the first row when omitted)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = GridFormat::Tokens)]
    pub format: GridFormat,
}

impl InputArgs {
    pub fn load_options(&self, allow_shaded: bool) -> LoadOptions {
        LoadOptions {
            format: self.format,
            size: self.size,
            allow_shaded,
        }
    }
}
