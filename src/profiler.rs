use ahash::AHashMap;

use std::{
    sync::LazyLock,
    sync::RwLock,
    time::{Duration, Instant},
};

struct PhaseStats {
    total: Duration,
    calls: u64,
}

static PHASE_TABLE: LazyLock<RwLock<AHashMap<&'static str, PhaseStats>>> =
    LazyLock::new(|| RwLock::new(AHashMap::new()));

/// Runs `f` and charges the elapsed wall time to `tag`.
pub fn time<T: FnOnce() -> X, X>(tag: &'static str, f: T) -> X {
    let start = Instant::now();
    let res = f();
    let elapsed = start.elapsed();

    let mut table = PHASE_TABLE.write().unwrap();
    let entry = table.entry(tag).or_insert(PhaseStats {
        total: Duration::ZERO,
        calls: 0,
    });
    entry.total += elapsed;
    entry.calls += 1;

    res
}

/// Dumps accumulated phase timings to stderr, slowest first.
pub fn report() {
    use colored::Colorize;

    let table = PHASE_TABLE.read().unwrap();
    let mut pairs: Vec<_> = table.iter().collect();
    pairs.sort_by(|(_, b), (_, a)| a.total.cmp(&b.total));

    let grand_total: Duration = pairs.iter().map(|(_, s)| s.total).sum();

    eprintln!("phase timings:");
    for (tag, stats) in pairs {
        let fraction = if grand_total.is_zero() {
            0.0
        } else {
            stats.total.as_secs_f64() / grand_total.as_secs_f64()
        };
        let percent = format!("{:.1}%", fraction * 100.0);
        let percent = if fraction < 0.1 {
            percent.green()
        } else if fraction < 0.5 {
            percent.yellow()
        } else {
            percent.red()
        };

        eprintln!(
            "    {:12} {:>10?} {:>7} ({} calls)",
            tag, stats.total, percent, stats.calls
        );
    }
}
