use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use rust_rref::text::parse_matrix;
use rust_rref::{rref_with, Matrix, MatrixDense, RrefOptions, Strategy};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Reduced row echelon form
    Rref,
    Rank,
    Inverse,
    /// Solve `A x = b`, the last column is `b`
    Solve,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Matrix file, one row per line. Reads stdin when absent.
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::Rref)]
    pub mode: Mode,

    /// Use the recursive elimination
    #[arg(short, long)]
    pub recursive: bool,

    /// Move all-zero rows to the bottom of the result
    #[arg(short = 'z', long)]
    pub sort_zero_rows: bool,

    #[arg(short, long, default_value_t = 4)]
    pub precision: usize,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            Ok(buffer)
        }
    }
}

/// Splits `[A | b]` at the last column and solves `A x = b`. Returns `x` and
/// the number of free variables.
fn solve_augmented(matrix: &MatrixDense<f64>) -> Result<(Vec<f64>, usize)> {
    if matrix.cols == 0 {
        bail!("solve needs an augmented matrix [A | b]");
    }
    let n = matrix.cols - 1;
    let a = matrix.columns(0..n);
    let b = matrix.columns(n..n + 1).cells;
    let (x, rank) = a.solve_right(b)?;
    Ok((x, n - rank))
}

fn run(args: &Args) -> Result<()> {
    let matrix = parse_matrix(&read_input(args.input.as_ref())?)?;
    log::debug!("read a {}x{} matrix", matrix.rows, matrix.cols);
    let precision = args.precision;

    match args.mode {
        Mode::Rref => {
            let strategy = if args.recursive {
                Strategy::Recursive
            } else {
                Strategy::Iterative
            };
            let options = RrefOptions::new()
                .strategy(strategy)
                .sort_zero_rows(args.sort_zero_rows);
            print!("{:.*}", precision, rref_with(matrix, &options)?);
        }
        Mode::Rank => println!("{}", matrix.rank()),
        Mode::Inverse => print!("{:.*}", precision, matrix.inverse()?),
        Mode::Solve => {
            let (x, free) = solve_augmented(&matrix)?;
            log::info!("{free} free variable(s) set to 0");

            let solution = MatrixDense {
                rows: x.len(),
                cols: 1,
                cells: x,
            };
            print!("{:.*}", precision, solution);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("rref: {err:?}");
        process::exit(1)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
