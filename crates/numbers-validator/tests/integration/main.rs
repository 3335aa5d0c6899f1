//! Integration tests for the `NumbersValidator` facade.
//!
//! One module per operation, each keyed off the exact message text and the
//! error kind.

mod even_numbers;
mod is_all_numbers;
mod is_integer;
mod is_number_even;
