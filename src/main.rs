//! Generates the two order-book test data CSVs in the current directory
//! (or `OUT_DIR`): `RandTestDataErratic.csv` and `RandTestDataRW.csv`.
//!
//! Overrides via environment: `SEED`, `ROWS`, `OUT_DIR`.

use orderbook_testdata::{generate, write_csv, DatasetConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let _ = env_logger::try_init();
    let mut config = DatasetConfig::default();
    if let Some(seed) = std::env::var("SEED").ok().and_then(|s| s.parse().ok()) {
        config.seed = seed;
    }
    if let Some(rows) = std::env::var("ROWS").ok().and_then(|s| s.parse().ok()) {
        config.rows = rows;
    }
    if let Ok(dir) = std::env::var("OUT_DIR") {
        config.erratic_path = std::path::Path::new(&dir).join("RandTestDataErratic.csv");
        config.walk_path = std::path::Path::new(&dir).join("RandTestDataRW.csv");
    }

    if let Err(err) = run(&config) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &DatasetConfig) -> Result<(), orderbook_testdata::Error> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let data = generate(&mut rng, config)?;

    // Stand-in for the plot the original tooling drew: log the walk's shape.
    let prices: Vec<i64> = data.random_walk.iter().map(|r| r.order_price).collect();
    log::info!(
        "walk accepted after {} attempt(s): first {} last {} min {} max {}",
        data.walk_attempts,
        prices.first().copied().unwrap_or_default(),
        prices.last().copied().unwrap_or_default(),
        prices.iter().copied().min().unwrap_or_default(),
        prices.iter().copied().max().unwrap_or_default(),
    );

    write_csv(&data.erratic, &config.erratic_path)?;
    write_csv(&data.random_walk, &config.walk_path)?;
    Ok(())
}
