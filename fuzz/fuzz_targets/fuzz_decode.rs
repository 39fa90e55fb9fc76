#![no_main]
use libfuzzer_sys::fuzz_target;
use fp_physics::persist::decode_record;
use fp_physics::{JointLimit, Material, Motor, Quaternion, SpringSettings};

// Decoding untrusted bytes returns an error at worst, never panics.
fuzz_target!(|data: &[u8]| {
    let _ = decode_record::<Quaternion>(data);
    let _ = decode_record::<SpringSettings>(data);
    let _ = decode_record::<JointLimit>(data);
    let _ = decode_record::<Motor>(data);
    let _ = decode_record::<Material>(data);
});
