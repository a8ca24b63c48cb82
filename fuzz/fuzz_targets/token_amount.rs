#![no_main]

use arbitrary::Arbitrary;
use grid_math::{format_units, from_raw_token_amount, parse_units, to_raw_token_amount};
use libfuzzer_sys::fuzz_target;
use primitive_types::U256;

#[derive(Arbitrary, Debug)]
struct TokenAmountInput {
    amount: [u64; 4],
    decimals: u8,
    text: String,
}

// Decimal rebasing must be exact for strings and never overstate for floats.
// Arbitrary text must be rejected with an error, never a panic.
fuzz_target!(|input: TokenAmountInput| {
    let amount = U256(input.amount);
    let decimals = input.decimals % 78;

    let formatted = format_units(amount, decimals).unwrap();
    assert_eq!(parse_units(&formatted, decimals).unwrap(), amount);

    let display = from_raw_token_amount(amount, decimals).unwrap();
    assert!(display.is_finite() && display >= 0.0);
    if let Ok(raw) = to_raw_token_amount(display, decimals) {
        assert!(raw <= amount);
    }

    let _ = parse_units(&input.text, decimals);
});
