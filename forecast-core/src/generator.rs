//! Mock forecast generation.
//!
//! Every call draws a fresh 7-day window ending at `today`, newest first.
//! The random source is injected so callers can seed it.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::debug;

pub use rand::rngs::StdRng;

use crate::model::{
    Condition, DailyForecast, FIRST_HOUR, FORECAST_DAYS, HOURLY_SLOTS, HourlyForecast,
};

pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 15..=29;
pub const FEELS_LIKE_RANGE: RangeInclusive<i32> = 13..=27;
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 50..=79;
pub const WIND_SPEED_RANGE: RangeInclusive<u32> = 5..=24;
pub const PRECIPITATION_RANGE: RangeInclusive<u8> = 0..=79;
pub const HOURLY_TEMPERATURE_RANGE: RangeInclusive<i32> = 15..=24;

/// Deterministic random source for reproducible forecasts.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeded when a seed is given, otherwise seeded from the OS.
pub fn seeded_or_random(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seeded(seed),
        None => StdRng::from_os_rng(),
    }
}

/// A full forecast window, newest day first.
pub type ForecastWindow = [DailyForecast; FORECAST_DAYS];

/// Generate the 7-day window ending at `today`. Index 0 is `today`, index 6 is
/// six days earlier.
pub fn generate<R: Rng>(today: NaiveDate, rng: &mut R) -> ForecastWindow {
    let days = std::array::from_fn(|offset| generate_day(today, offset, rng));

    debug!(%today, days = FORECAST_DAYS, "generated mock forecast");
    days
}

fn generate_day<R: Rng>(today: NaiveDate, offset: usize, rng: &mut R) -> DailyForecast {
    let date = today - chrono::Duration::days(offset as i64);

    DailyForecast {
        date,
        is_today: offset == 0,
        temperature_c: rng.random_range(TEMPERATURE_RANGE),
        feels_like_c: rng.random_range(FEELS_LIKE_RANGE),
        condition: random_condition(rng),
        humidity_pct: rng.random_range(HUMIDITY_RANGE),
        wind_speed_kmh: rng.random_range(WIND_SPEED_RANGE),
        precipitation_pct: rng.random_range(PRECIPITATION_RANGE),
        hourly: generate_hourly(rng),
    }
}

fn generate_hourly<R: Rng>(rng: &mut R) -> Vec<HourlyForecast> {
    (0..HOURLY_SLOTS as u32)
        .map(|slot| HourlyForecast {
            time: format!("{}:00", FIRST_HOUR + slot),
            temperature_c: rng.random_range(HOURLY_TEMPERATURE_RANGE),
            condition: random_condition(rng),
        })
        .collect()
}

fn random_condition<R: Rng>(rng: &mut R) -> Condition {
    let all = Condition::all();
    all[rng.random_range(0..all.len())]
}
