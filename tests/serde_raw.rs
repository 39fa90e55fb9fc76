//! Serde support: every value serializes through its raw integers, so JSON
//! output never contains a decimal or float rendering of a scalar.

#![cfg(feature = "serde")]

use fp_physics::{
    ConeShape, ConvexShape, ConvexShapeDescription, Fp, JointLimit, Motor, Quaternion,
    SpringSettings, TimeStep, Vector3,
};

#[test]
fn test_fp_is_raw_integer() {
    let json = serde_json::to_string(&Fp::ONE).unwrap();
    assert_eq!(json, "65536");
    let back: Fp = serde_json::from_str("-32768").unwrap();
    assert_eq!(back, -Fp::ONE.half());
}

#[test]
fn test_vector_and_quaternion() {
    let v = Vector3::new(Fp::PI, -Fp::ONE, Fp::from_raw(1));
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":205887,"y":-65536,"z":1}"#);
    assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);

    let q = Quaternion::from_axis_angle(Vector3::UNIT_Y, Fp::ONE);
    let back: Quaternion = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
    assert_eq!(back, q);
}

#[test]
fn test_settings_round_trip() {
    let spring = SpringSettings::advanced_only(Fp::ONE.half(), Fp::from_int(3));
    let back: SpringSettings =
        serde_json::from_str(&serde_json::to_string(&spring).unwrap()).unwrap();
    assert_eq!(back, spring);

    let mut motor = Motor::new(Fp::from_int(40));
    motor.update(&TimeStep::from_hz(120));
    let back: Motor = serde_json::from_str(&serde_json::to_string(&motor).unwrap()).unwrap();
    assert_eq!(back, motor);

    let limit = JointLimit::new(Fp::from_int(2), Fp::ONE, Fp::ZERO);
    let back: JointLimit = serde_json::from_str(&serde_json::to_string(&limit).unwrap()).unwrap();
    assert_eq!(back, limit);
}

#[test]
fn test_shape_description() {
    let cone = ConeShape::new(Fp::from_int(2), Fp::ONE);
    let json = serde_json::to_string(cone.description()).unwrap();
    assert!(json.contains("\"collision_margin\":2621"));
    let back: ConvexShapeDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(*cone.description(), back);
}
