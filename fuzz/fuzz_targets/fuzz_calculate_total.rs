#![no_main]

use invoicekit::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fn decimal(chunk: &[u8]) -> Decimal {
    let mut raw = [0u8; 16];
    raw[..chunk.len()].copy_from_slice(chunk);
    // scale must stay within 0..=28, only the sign bit may be set
    raw[2] %= 29;
    raw[3] &= 0x80;
    raw[0] = 0;
    raw[1] = 0;
    Decimal::deserialize(raw)
}

fuzz_target!(|data: &[u8]| {
    let mut chunks = data.chunks(16);
    let Some(discount) = chunks.next().map(decimal) else {
        return;
    };
    let mut inv = Invoice::new("S", "R", "", "", "", "");
    while let (Some(price), Some(tax)) = (chunks.next(), chunks.next()) {
        inv.add_item("fuzz", decimal(price), decimal(tax));
    }
    // Overflow must surface as an error, never a panic.
    let _ = inv.calculate_total(discount);
});
