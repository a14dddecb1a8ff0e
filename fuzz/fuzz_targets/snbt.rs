#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    lite_nbt_fuzz::test_snbt(data);
});
