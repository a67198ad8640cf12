//! Draws the elbow chart of a CSV table, or of three synthetic blobs when no file is given.
//!
//! ```text
//! cargo run --example elbow -- customers.csv
//! ```

use elbow_datasets::generate::named_blobs;
use elbow_datasets::{load_csv, Table};
use linfa_elbow::{plot_elbow_method, BitMapRenderer, KMeansInertia};
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let table: Table = match std::env::args().nth(1) {
        Some(path) => load_csv(path)?,
        None => {
            let mut rng = Xoshiro256Plus::seed_from_u64(42);
            let centroids = array![[0., 1.], [-10., 20.], [-1., 10.]];
            named_blobs(100, &centroids, vec!["x", "y"], &mut rng)
        }
    };

    let mut renderer = BitMapRenderer::new("elbow.png");
    plot_elbow_method(&table, 1, 12, &KMeansInertia::new(42), &mut renderer)?;
    println!("elbow chart written to {}", renderer.path().display());

    Ok(())
}
