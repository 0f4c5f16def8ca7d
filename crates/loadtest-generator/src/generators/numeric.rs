//! Numeric value generators.

use rand::Rng;
use search_types::FieldValue;

/// Lower bound for generated prices.
pub const MIN_PRICE: f64 = 10.0;

/// Upper bound for generated prices.
pub const MAX_PRICE: f64 = 1000.0;

/// Generate a random float in the given range (inclusive), rounded to 2 decimal places.
pub fn generate_rounded_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> FieldValue {
    let value = rng.random_range(min..=max);
    FieldValue::F64(round_to_cents(value).clamp(min, max))
}

/// Generate a `price` value in `[MIN_PRICE, MAX_PRICE]`.
pub fn generate_price<R: Rng>(rng: &mut R) -> FieldValue {
    generate_rounded_float_range(rng, MIN_PRICE, MAX_PRICE)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
