//! Demo: prints a sequence, sorts it, prints it again.

use std::{fmt::Display, process::ExitCode};

use clap::Parser;
use insertion_sort::{
    constants::{DEMO_INPUT, RANDOM_MAX, RANDOM_MIN},
    sort_checked, SortError,
};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "insertion-sort", version, about = "Sort integers with insertion sort")]
struct Cli {
    /// Values to sort (default: 1 2 3 4)
    #[arg(allow_negative_numbers = true, conflicts_with = "random")]
    values: Vec<i64>,

    /// Sort LEN random values instead
    #[arg(long, value_name = "LEN")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Length reported to the sort (default: number of values)
    #[arg(long, allow_negative_numbers = true)]
    len: Option<isize>,
}

impl Cli {
    fn input(&self) -> Vec<i64> {
        if let Some(len) = self.random {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            return (0..len)
                .map(|_| rng.gen_range(RANDOM_MIN..=RANDOM_MAX))
                .collect();
        }
        if self.values.is_empty() {
            DEMO_INPUT.to_vec()
        } else {
            self.values.clone()
        }
    }
}

/// Space-separated values, each followed by one space.
fn render<T: Display>(v: &[T]) -> String {
    v.iter().map(|x| format!("{x} ")).collect()
}

fn run(cli: &Cli) -> Result<(), SortError> {
    let mut v = cli.input();
    let len = match cli.len {
        Some(len) => len,
        None => isize::try_from(v.len()).unwrap_or(isize::MAX),
    };
    info!("sorting {} values with reported length {len}", v.len());

    println!("unsorted array: {}", render(&v));
    sort_checked(&mut v, len)?;
    println!("sorted array: {}", render(&v));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
