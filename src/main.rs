mod cli;
mod emit;
mod profiler;
mod sieve;

use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use log::LevelFilter;

use crate::sieve::PrimeTable;

fn main() {
    set_panic_handler();

    let args = cli::CliArgs::parse();

    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        process::exit(1);
    }

    if args.profile {
        profiler::report();
    }
}

fn run(args: &cli::CliArgs) -> io::Result<()> {
    let table = profiler::time("sieve", || PrimeTable::build(args.limit));

    if args.verbose {
        log_stats(&table, args.preview);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    profiler::time("emit", || emit::write_report(&mut out, &table, args.preview))?;
    out.flush()
}

fn log_stats(table: &PrimeTable, preview: usize) {
    let small = table.primes_below(preview).count();
    let total = table.primes_below(table.limit()).count();
    let candidates = table.blum_candidates().count();

    log::debug!("{} primes below {}", small, preview);
    log::debug!(
        "{} primes below {}, {} of them = 3 mod 4",
        total,
        table.limit(),
        candidates
    );
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// When any thread panics, close the process.
fn set_panic_handler() {
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        process::exit(1);
    }));
}
