//! Value list fuzzer.
//!
//! Feeds arbitrary strings through the value tokenizer and the statement
//! matcher and checks the invariants in `check_value_list`.

use honggfuzz::fuzz;
use strain_dump_extract::testing::check_value_list;

fn main() {
    loop {
        fuzz!(|input: String| {
            check_value_list(&input);
        });
    }
}
