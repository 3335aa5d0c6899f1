//! Basic usage example for numbers-validator
//!
//! Run with `RUST_LOG=numbers_validator=debug` to see rejection events.

use numbers_validator::NumbersValidator;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let validator = NumbersValidator::new();

    for input in [json!(4), json!(5), json!(0), json!("5")] {
        match validator.is_number_even(&input) {
            Ok(even) => println!("✓ is_number_even({input}) = {even}"),
            Err(e) => println!("✗ is_number_even({input}): {e} ({})", e.kind()),
        }
    }

    let numbers = json!([1, 2, 3, 4, 5, 6]);
    match validator.get_even_numbers_from_array(&numbers) {
        Ok(evens) => println!("✓ evens of {numbers} = {}", json!(evens)),
        Err(e) => println!("✗ {e}"),
    }

    let mixed = json!([1, 2, "not a number", 4]);
    match validator.is_all_numbers(&mixed) {
        Ok(all) => println!("✓ is_all_numbers({mixed}) = {all}"),
        Err(e) => println!("✗ {e}"),
    }
    if let Err(e) = validator.get_even_numbers_from_array(&mixed) {
        println!("✗ {}", e.to_json_value());
    }

    match validator.is_integer(&json!(5.5)) {
        Ok(int) => println!("✓ is_integer(5.5) = {int}"),
        Err(e) => println!("✗ {e}"),
    }
}
