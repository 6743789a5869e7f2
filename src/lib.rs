//! # Order-book test data generator
//!
//! Synthesizes random tabular datasets simulating order-book activity
//! (order type, volume, price) and serializes them to headerless CSV. Two
//! datasets come out of one run: an "erratic" table with uniformly random
//! prices and a table whose price column is a random walk kept above a
//! floor by rejection sampling. Same seed ⇒ same datasets.
//!
//! ## Example
//!
//! ```rust
//! use orderbook_testdata::{generate, DatasetConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = DatasetConfig {
//!     rows: 100,
//!     ..Default::default()
//! };
//! let mut rng = StdRng::seed_from_u64(42);
//! let data = generate(&mut rng, &config).unwrap();
//! assert_eq!(data.erratic.len(), 100);
//! assert_eq!(data.random_walk[0].order_price, config.walk_anchor);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod types;
pub mod walk;

pub use config::DatasetConfig;
pub use dataset::{assemble, generate, read_csv, write_csv, Datasets};
pub use error::Error;
pub use types::Record;
pub use walk::{cumulative_walk, generate_walk, sample_steps, WalkOutcome};
