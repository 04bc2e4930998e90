use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::RangeInclusive;

use crate::random::TemperatureSource;

pub const DEFAULT_DAYS: i32 = 7;
// The misspelling is part of the wire contract.
pub const DEFAULT_UNITS: &str = "Farenheit";

pub const MIN_TEMPERATURE_RANGE: RangeInclusive<i32> = 50..=89;
// Added on top of the minimum to get the maximum.
pub const SPREAD_RANGE: RangeInclusive<i32> = 5..=19;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_days", deserialize_with = "days_or_zero")]
    pub days: i32,
    #[serde(default = "default_units", deserialize_with = "units_or_default")]
    pub units: String,
}

impl Default for ForecastRequest {
    fn default() -> Self {
        ForecastRequest {
            location: None,
            days: DEFAULT_DAYS,
            units: default_units(),
        }
    }
}

fn default_days() -> i32 {
    DEFAULT_DAYS
}

fn default_units() -> String {
    DEFAULT_UNITS.to_string()
}

// Only a missing field gets the default. An explicit null binds as zero days.
fn days_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

// An explicit null is handled like a missing field.
fn units_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_units))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub min: f64,
    pub max: f64,
    pub units: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastResponse {
    pub location: Option<String>,
    pub units: String,
    pub forecast: Vec<DayForecast>,
}

/// Case-insensitive match on "celsius" or "c".
///
/// Characters are folded one at a time through their upper and lower case
/// forms, so `"celſius"` and `"CELSıUS"` count as well.
pub fn is_celsius(units: &str) -> bool {
    equals_ignore_case(units, "celsius") || equals_ignore_case(units, "c")
}

fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left
            .chars()
            .zip(right.chars())
            .all(|(l, r)| chars_equal_ignore_case(l, r))
}

fn chars_equal_ignore_case(left: char, right: char) -> bool {
    if left == right {
        return true;
    }
    let (left_upper, right_upper) = (left.to_uppercase(), right.to_uppercase());
    if left_upper.clone().eq(right_upper.clone()) {
        return true;
    }
    left_upper
        .flat_map(char::to_lowercase)
        .eq(right_upper.flat_map(char::to_lowercase))
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Produces `request.days` synthetic day forecasts starting at `today`.
///
/// Temperatures are drawn in Fahrenheit and converted when the requested
/// units name Celsius. The units string itself is echoed back untouched.
/// A non-positive day count gives an empty forecast.
pub fn generate_forecast(
    request: ForecastRequest,
    today: NaiveDate,
    source: &mut impl TemperatureSource,
) -> ForecastResponse {
    let celsius = is_celsius(&request.units);
    let days = u64::try_from(request.days).unwrap_or(0);

    let forecast = (0..days)
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let min = source.next_in_range(MIN_TEMPERATURE_RANGE);
            let max = source.next_in_range(min + SPREAD_RANGE.start()..=min + SPREAD_RANGE.end());
            let (min, max) = if celsius {
                (
                    fahrenheit_to_celsius(f64::from(min)),
                    fahrenheit_to_celsius(f64::from(max)),
                )
            } else {
                (f64::from(min), f64::from(max))
            };
            DayForecast {
                date,
                min,
                max,
                units: request.units.clone(),
            }
        })
        .collect();

    ForecastResponse {
        location: request.location,
        units: request.units,
        forecast,
    }
}
