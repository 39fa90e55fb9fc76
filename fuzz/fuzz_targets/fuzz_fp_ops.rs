#![no_main]
use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use fp_physics::{Fp, Quaternion, Vector3};

#[derive(Debug, Arbitrary)]
struct OpsInput {
    /// Raw scalar operands
    a: i64,
    b: i64,
    /// Small integer operand
    n: i32,
    /// Quaternion components (i32 keeps products in range often enough to be interesting)
    q: [i32; 4],
    /// Interpolation factor raw value
    t: i32,
}

// Every scalar and rotation operation is total: no input may panic.
fuzz_target!(|input: OpsInput| {
    let a = Fp::from_raw(input.a);
    let b = Fp::from_raw(input.b);

    let _ = a + b;
    let _ = a - b;
    let _ = a * b;
    let _ = a / b;
    let _ = a % b;
    let _ = a * input.n;
    let _ = a / input.n;
    let _ = a % input.n;
    let _ = a.sqrt();
    let _ = a.sin_cos();
    let _ = Fp::atan2(a, b);
    let _ = a.acos();
    let _ = a.round();

    // every displayed value parses back, including MIN and MAX
    let text = a.to_string();
    assert!(Fp::parse(&text).is_ok(), "{text}");

    let q = Quaternion::new(
        Fp::from_raw(input.q[0] as i64),
        Fp::from_raw(input.q[1] as i64),
        Fp::from_raw(input.q[2] as i64),
        Fp::from_raw(input.q[3] as i64),
    );
    let unit = q.normalize();
    let _ = unit.transform(Vector3::new(a, b, a));
    let _ = unit.inverse();
    let _ = Quaternion::slerp(Quaternion::IDENTITY, unit, Fp::from_raw(input.t as i64));
    let _ = unit.axis_angle();
});
