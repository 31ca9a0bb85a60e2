mod constellation;
mod j2;
mod tle;

use log::LevelFilter;
use std::{str::FromStr, sync::Once};

use crate::prelude::Epoch;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference epoch shared by the scenarios
pub fn reference_epoch() -> Epoch {
    Epoch::from_str("2024-01-01T00:00:00 UTC").unwrap()
}
