#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use orgcheck::CsvEmployeeRepository;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, including invalid UTF-8, must only ever yield errors
    let _ = CsvEmployeeRepository::new().read_from(data, Path::new("fuzz.csv"));
});
