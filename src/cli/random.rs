//! Random command: print random base colors.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::palette::generate_random_color_with;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate random base colors
#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// Number of colors to generate
    #[arg(short = 'n', long, value_name = "N", default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RandomArgs {
    /// Execute the random command
    pub fn execute(&self) -> CliResult<()> {
        if self.count == 0 {
            return Err(CliError::validation("--count must be at least 1"));
        }

        let colors = match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..self.count)
                    .map(|_| generate_random_color_with(&mut rng))
                    .collect::<Vec<_>>()
            }
            None => {
                let mut rng = rand::rng();
                (0..self.count)
                    .map(|_| generate_random_color_with(&mut rng))
                    .collect()
            }
        };

        if self.json {
            return print_json(&colors);
        }

        for color in colors {
            println!("{color}");
        }
        Ok(())
    }
}
