//! Quoted value fuzzer.
//!
//! Encodes arbitrary values as a single-quoted value list and checks that
//! the tokenizer gives them back.

use honggfuzz::fuzz;
use strain_dump_extract::testing::check_quoted_values;

fn main() {
    loop {
        fuzz!(|values: Vec<String>| {
            check_quoted_values(&values);
        });
    }
}
