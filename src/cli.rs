use clap::Parser;

use crate::sieve;

/// Enumerate primes and Blum-integer candidate primes for the Rabin cryptosystem.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Exclusive upper bound for the sieve.
    #[clap(long, default_value_t = sieve::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Exclusive upper bound for the leading block of small primes.
    #[clap(long, default_value_t = sieve::DEFAULT_PREVIEW)]
    pub preview: usize,

    /// Dump timing information after running.
    #[clap(long)]
    pub profile: bool,

    /// Print debug information.
    #[clap(long, short)]
    pub verbose: bool,
}
