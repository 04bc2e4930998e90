use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Source of the integer draws a forecast is built from.
pub trait TemperatureSource {
    fn next_in_range(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl<R> TemperatureSource for R
where
    R: Rng,
{
    fn next_in_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.random_range(range)
    }
}

// One generator for the lifetime of the process, shared by all requests.
pub type SharedRng = Arc<Mutex<StdRng>>;

pub fn create_shared_rng(seed: Option<u64>) -> SharedRng {
    let rng = match seed {
        Some(seed) => {
            log::info!("seeding temperature generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            log::info!("seeding temperature generator from os entropy");
            StdRng::from_os_rng()
        }
    };
    Arc::new(Mutex::new(rng))
}
