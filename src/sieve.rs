/// Default exclusive bound for the sieve.
pub const DEFAULT_LIMIT: usize = 100_000;

/// Default exclusive bound for the small-prime preview block.
pub const DEFAULT_PREVIEW: usize = 100;

/// Primality table over `[0, limit)`, built once by the sieve of
/// Eratosthenes and immutable afterwards.
///
/// Flags at 0 and 1 are never consulted: `is_prime` rejects anything
/// below 2 before looking at the table.
pub struct PrimeTable {
    limit: usize,
    flags: Vec<bool>,
}

impl PrimeTable {
    pub fn build(limit: usize) -> Self {
        let mut flags = vec![true; limit];

        // marking starts at i*i: everything below has a smaller prime
        // factor and is already cleared, which also bounds the outer loop
        let mut i = 2;
        while i * i < limit {
            if flags[i] {
                let mut j = i * i;
                while j < limit {
                    flags[j] = false;
                    j += i;
                }
            }
            i += 1;
        }

        PrimeTable { limit, flags }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_prime(&self, n: usize) -> bool {
        n >= 2 && n < self.limit && self.flags[n]
    }

    /// Ascending primes in `[2, min(bound, limit))`.
    pub fn primes_below(&self, bound: usize) -> impl Iterator<Item = usize> + '_ {
        (2..bound.min(self.limit)).filter(|&n| self.flags[n])
    }

    /// Ascending primes below the limit which are congruent to 3 mod 4.
    /// A product of two distinct such primes is a Blum integer, the
    /// modulus form the Rabin cryptosystem wants.
    pub fn blum_candidates(&self) -> impl Iterator<Item = usize> + '_ {
        self.primes_below(self.limit).filter(|&p| p % 4 == 3)
    }
}
