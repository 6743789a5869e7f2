//! Dataset assembly and CSV serialization.
//!
//! A straight-line pipeline: draw the column sequences, zip them into rows,
//! write each table out. Retries exist only inside the walk generator; this
//! layer never retries.

use std::path::Path;

use rand::Rng;

use crate::config::DatasetConfig;
use crate::error::Error;
use crate::types::Record;
use crate::walk::generate_walk;

/// Both generated tables. They share the order_type and order_volume columns
/// and differ only in the price source.
#[derive(Clone, Debug)]
pub struct Datasets {
    /// Rows with uniformly random prices.
    pub erratic: Vec<Record>,
    /// Rows with the random-walk price series.
    pub random_walk: Vec<Record>,
    /// Candidates the walk generator consumed (1 = accepted first try).
    pub walk_attempts: u32,
}

/// Draws `n` integers uniformly from the half-open range `[low, high)`.
fn sample_uniform(rng: &mut impl Rng, n: usize, low: i64, high: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(low..high)).collect()
}

/// Zips three equal-length column sequences into rows.
pub fn assemble(
    order_type: &[i64],
    order_volume: &[i64],
    order_price: &[i64],
) -> Result<Vec<Record>, Error> {
    if order_type.len() != order_volume.len() || order_type.len() != order_price.len() {
        return Err(Error::InvalidConfiguration(format!(
            "column lengths differ: type {}, volume {}, price {}",
            order_type.len(),
            order_volume.len(),
            order_price.len()
        )));
    }
    Ok(order_type
        .iter()
        .zip(order_volume)
        .zip(order_price)
        .map(|((&t, &v), &p)| Record::new(t, v, p))
        .collect())
}

/// Generates both datasets from one RNG. Validates the config, draws the
/// walk first (as the reference run does), then the three shared/independent
/// column sequences, and assembles the two tables.
pub fn generate(rng: &mut impl Rng, config: &DatasetConfig) -> Result<Datasets, Error> {
    config.validate()?;
    let walk = generate_walk(
        rng,
        config.rows,
        config.walk_floor,
        config.walk_anchor,
        config.walk_max_attempts,
    )?;
    let order_type = sample_uniform(rng, config.rows, config.order_type_low, config.order_type_high);
    let order_volume = sample_uniform(rng, config.rows, config.volume_low, config.volume_high);
    let erratic_price = sample_uniform(rng, config.rows, config.erratic_low, config.erratic_high);

    let erratic = assemble(&order_type, &order_volume, &erratic_price)?;
    let random_walk = assemble(&order_type, &order_volume, &walk.walk)?;
    Ok(Datasets {
        erratic,
        random_walk,
        walk_attempts: walk.attempts,
    })
}

/// Writes a table as comma-delimited text: no header row, no index column,
/// columns in (order_type, order_volume, order_price) order. Overwrites any
/// existing file at `path`.
pub fn write_csv(rows: &[Record], path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let fail = |source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(fail)?;
    for row in rows {
        writer.serialize(row).map_err(fail)?;
    }
    writer.flush().map_err(|e| fail(e.into()))?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Reads a headerless dataset CSV back into rows. Counterpart of
/// [`write_csv`], used by the engine's replay tests.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<Record>, Error> {
    let path = path.as_ref();
    let fail = |source| Error::ReadFailure {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(fail)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result.map_err(fail)?);
    }
    Ok(rows)
}
