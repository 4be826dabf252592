#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use orgcheck::{AnalysisPolicy, CsvEmployeeRepository};

fuzz_target!(|data: &[u8]| {
    // Whatever the reader accepts, validation must terminate without panicking
    // (cycles, self-references, dangling managers included).
    if let Ok(records) = CsvEmployeeRepository::new().read_from(data, Path::new("fuzz.csv")) {
        let _ = orgcheck::analyze_records(&records, AnalysisPolicy::default());
    }
});
