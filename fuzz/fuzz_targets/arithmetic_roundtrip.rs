#![no_main]
use infocode::{arithmetic, IntervalTable, SymbolModel};
use libfuzzer_sys::fuzz_target;

const TERMINATOR: u8 = 0xFF;

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() {
        return;
    }

    // Keep messages short and the alphabet small: f64 precision bounds the
    // length for which the roundtrip is guaranteed.
    let message: Vec<u8> = data
        .iter()
        .take(16)
        .map(|b| b % 4)
        .chain([TERMINATOR])
        .collect();

    let model = SymbolModel::from_symbols(message.iter().copied()).unwrap();
    let table = IntervalTable::new(&model);

    let (value, _) = arithmetic::encode(&message, &table).unwrap();
    let (decoded, _) =
        arithmetic::decode(value, &table, TERMINATOR, arithmetic::DEFAULT_MAX_STEPS).unwrap();

    assert_eq!(&message[..message.len() - 1], &decoded[..]);
});
