#![no_main]

use binsig::Format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let hint = data.len() as u32;
    for format in Format::ALL {
        let verdict = format.matches(data, hint);
        assert_eq!(verdict, format.matches(data, 0));
        if data.len() < format.min_len() {
            assert!(!verdict);
        }
    }
});
