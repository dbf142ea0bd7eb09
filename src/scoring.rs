//! Weather suitability scoring
//!
//! Maps one forecast sample to a single comparable score in [0, 100]. The
//! blend weights and thresholds are a fixed policy: changing them would make
//! scores from different requests incomparable.

use crate::models::ForecastSample;
use crate::util::round1;

/// Ideal daytime temperature range in °C, boundary inclusive
const IDEAL_TEMP_RANGE: (f64, f64) = (18.0, 28.0);
/// Midpoint of the ideal range, anchor for the out-of-range falloff
const IDEAL_TEMP_MIDPOINT: f64 = 24.0;
/// Wind normalization divisor in m/s; the wind sub-score hits zero at twice this
const MAX_WIND_SPEED: f64 = 15.0;

/// Sky conditions that earn the full condition sub-score
const EXCELLENT_CONDITIONS: [&str; 2] = ["clear", "sunny"];
/// Acceptable cloud conditions
const GOOD_CONDITIONS: [&str; 4] = [
    "few clouds",
    "scattered clouds",
    "broken clouds",
    "overcast clouds",
];
/// Conditions that make an outdoor event unpleasant
const BAD_CONDITIONS: [&str; 5] = ["rain", "drizzle", "snow", "thunderstorm", "heavy rain"];

const WEIGHT_TEMPERATURE: f64 = 0.4;
const WEIGHT_CONDITION: f64 = 0.3;
const WEIGHT_WIND: f64 = 0.15;
const WEIGHT_PRECIPITATION: f64 = 0.15;

/// Suitability score for a sample that may be unavailable: an absent sample
/// scores 0.
#[must_use]
pub fn score_optional(sample: Option<&ForecastSample>) -> f64 {
    sample.map_or(0.0, score)
}

/// Suitability score in [0, 100] for one forecast sample, rounded to one
/// decimal place.
#[must_use]
pub fn score(sample: &ForecastSample) -> f64 {
    let blended = temperature_score(sample.temperature) * WEIGHT_TEMPERATURE
        + condition_score(&sample.condition) * WEIGHT_CONDITION
        + wind_score(sample.wind_speed) * WEIGHT_WIND
        + precipitation_score(sample.precipitation_probability) * WEIGHT_PRECIPITATION;
    round1(blended)
}

/// 100 inside the ideal range, linear falloff of 5 points per °C from the
/// range midpoint outside it, floored at 0.
fn temperature_score(temperature: f64) -> f64 {
    if (IDEAL_TEMP_RANGE.0..=IDEAL_TEMP_RANGE.1).contains(&temperature) {
        100.0
    } else {
        (100.0 - (temperature - IDEAL_TEMP_MIDPOINT).abs() * 5.0).max(0.0)
    }
}

/// Classify the condition text by substring containment, best class first.
/// Unrecognized conditions get a neutral 60.
fn condition_score(condition: &str) -> f64 {
    let condition = condition.to_lowercase();
    if EXCELLENT_CONDITIONS.iter().any(|c| condition.contains(c)) {
        100.0
    } else if GOOD_CONDITIONS.iter().any(|c| condition.contains(c)) {
        80.0
    } else if BAD_CONDITIONS.iter().any(|c| condition.contains(c)) {
        30.0
    } else {
        60.0
    }
}

/// Linear from 100 at calm down to 0 at 30 m/s
fn wind_score(wind_speed: f64) -> f64 {
    (100.0 - (wind_speed / MAX_WIND_SPEED) * 50.0).max(0.0)
}

/// Linear from 100 at 0% down to 50 at 100%
fn precipitation_score(precipitation_probability: f64) -> f64 {
    (100.0 - (precipitation_probability / 100.0) * 50.0).max(0.0)
}
