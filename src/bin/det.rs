use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use tracing::info;

use matrix_det::generator;
use matrix_det::input::parse_square;
use matrix_det::utils::{init_subscriber, round_to};

/// Reads `size` followed by `size * size` cells from stdin and prints the
/// determinant.
#[derive(Parser, Debug)]
#[command(name = "det", version)]
struct Cli {
    /// Parse cells as floating point numbers.
    #[arg(long)]
    float: bool,

    /// Printed instead of a determinant when there is none.
    #[arg(long, default_value_t = 999)]
    fallback: i64,

    /// Round floating point results to this many decimals.
    #[arg(long)]
    precision: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random matrix in the stdin format, and its determinant on stderr.
    Generate {
        #[arg(long, default_value_t = 5)]
        size: usize,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    init_subscriber();
    let cli = Cli::parse();

    if let Some(Command::Generate { size, seed }) = cli.command {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (matrix, determinant) = generator::random_case(&mut rng, size);
        info!(size, determinant, "generated matrix");

        println!("{} {}", size, matrix.cells().iter().join(" "));
        eprintln!("{}", determinant);
        return Ok(());
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading matrix from stdin")?;

    if cli.float {
        let matrix = parse_square::<f64>(&text).context("parsing matrix")?;
        let det = matrix.det().unwrap_or(cli.fallback as f64);
        match cli.precision {
            Some(digits) => println!("{}", round_to(det, digits)),
            None => println!("{}", det),
        }
    } else {
        let matrix = parse_square::<i64>(&text).context("parsing matrix")?;
        println!("{}", matrix.det().unwrap_or(cli.fallback));
    }

    Ok(())
}
