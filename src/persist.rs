//! Raw State Encoding
//!
//! Bit-exact binary encoding of the value types, used for replay files and
//! lockstep state hashing. Every scalar is written as its raw `i64` in
//! little-endian order, so two peers that encode the same state produce the
//! same bytes.
//!
//! # Record Format
//!
//! ```text
//! Magic:   "FPPH" (4 bytes)
//! Version: u32 LE
//! Count:   u32 LE
//! Values:  [T; count], each in its RawCodec layout
//! ```
//!
//! Booleans take one byte (`0` or `1`). Any other byte, a short buffer or
//! bytes left over after the last value fail with
//! [`PhysicsError::DeserializationFailed`].

use alloc::vec::Vec;

use crate::error::PhysicsError;
use crate::fixed::Fp;
use crate::joint_limit::JointLimit;
use crate::material::Material;
use crate::math::Vector3;
use crate::motor::Motor;
use crate::quaternion::Quaternion;
use crate::spring::SpringSettings;

/// Magic bytes at the start of a framed record
pub const MAGIC: &[u8; 4] = b"FPPH";

/// Version written by this build
pub const FORMAT_VERSION: u32 = 1;

// ============================================================================
// Codec trait
// ============================================================================

/// Raw little-endian encoding of a value
pub trait RawCodec: Sized {
    /// Append the encoded value to `out`
    fn encode(&self, out: &mut Vec<u8>);

    /// Decode a value from the front of `input` and advance past it
    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError>;

    /// Encode into a fresh buffer
    fn to_raw_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

// ============================================================================
// Primitive helpers
// ============================================================================

fn take<const N: usize>(input: &mut &[u8]) -> Result<[u8; N], PhysicsError> {
    if input.len() < N {
        log::debug!("raw decode: need {N} bytes, {} left", input.len());
        return Err(PhysicsError::DeserializationFailed);
    }
    let (head, rest) = input.split_at(N);
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(head);
    *input = rest;
    Ok(bytes)
}

fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn read_u32(input: &mut &[u8]) -> Result<u32, PhysicsError> {
    Ok(u32::from_le_bytes(take::<4>(input)?))
}

fn write_bool(out: &mut Vec<u8>, value: bool) {
    out.push(u8::from(value));
}

fn read_bool(input: &mut &[u8]) -> Result<bool, PhysicsError> {
    match take::<1>(input)?[0] {
        0 => Ok(false),
        1 => Ok(true),
        other => {
            log::debug!("raw decode: invalid bool byte {other}");
            Err(PhysicsError::DeserializationFailed)
        }
    }
}

// ============================================================================
// Value types
// ============================================================================

impl RawCodec for Fp {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        Ok(Fp::from_le_bytes(take::<8>(input)?))
    }
}

impl RawCodec for Vector3 {
    fn encode(&self, out: &mut Vec<u8>) {
        self.x.encode(out);
        self.y.encode(out);
        self.z.encode(out);
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        Ok(Vector3::new(
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
        ))
    }
}

impl RawCodec for Quaternion {
    fn encode(&self, out: &mut Vec<u8>) {
        self.x.encode(out);
        self.y.encode(out);
        self.z.encode(out);
        self.w.encode(out);
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        Ok(Quaternion::new(
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
        ))
    }
}

/// Layout: stiffness, damping, error reduction factor, softness, advanced flag
impl RawCodec for SpringSettings {
    fn encode(&self, out: &mut Vec<u8>) {
        self.stiffness().encode(out);
        self.damping().encode(out);
        self.advanced().error_reduction_factor().encode(out);
        self.advanced().softness().encode(out);
        write_bool(out, self.advanced().use_advanced_settings());
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        let stiffness = Fp::decode(input)?;
        let damping = Fp::decode(input)?;
        let error_reduction_factor = Fp::decode(input)?;
        let softness = Fp::decode(input)?;
        let use_advanced = read_bool(input)?;

        let mut settings = SpringSettings::default();
        settings.set_stiffness(stiffness);
        settings.set_damping(damping);
        let advanced = settings.advanced_mut();
        advanced.set_error_reduction_factor(error_reduction_factor);
        advanced.set_softness(softness);
        advanced.set_use_advanced_settings(use_advanced);
        Ok(settings)
    }
}

/// Layout: bounce threshold, bounciness, margin, exceeded flag
impl RawCodec for JointLimit {
    fn encode(&self, out: &mut Vec<u8>) {
        self.bounce_velocity_threshold().encode(out);
        self.bounciness().encode(out);
        self.margin().encode(out);
        write_bool(out, self.is_limit_exceeded());
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        let mut limit = JointLimit::new(
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
        );
        limit.set_limit_exceeded(read_bool(input)?);
        Ok(limit)
    }
}

/// Layout: max force, softness, then the per-step bounds and softness
impl RawCodec for Motor {
    fn encode(&self, out: &mut Vec<u8>) {
        self.max_force().encode(out);
        self.softness().encode(out);
        self.max_force_dt().encode(out);
        self.max_force_dt_squared().encode(out);
        self.used_softness().encode(out);
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        Ok(Motor::from_raw_parts(
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
        ))
    }
}

/// Layout: static friction, kinetic friction, bounciness
impl RawCodec for Material {
    fn encode(&self, out: &mut Vec<u8>) {
        self.static_friction().encode(out);
        self.kinetic_friction().encode(out);
        self.bounciness().encode(out);
    }

    fn decode(input: &mut &[u8]) -> Result<Self, PhysicsError> {
        Ok(Material::new(
            Fp::decode(input)?,
            Fp::decode(input)?,
            Fp::decode(input)?,
        ))
    }
}

// ============================================================================
// Framed records
// ============================================================================

/// Encode `values` as a framed record
///
/// Fails with [`PhysicsError::CapacityExceeded`] when the value count does
/// not fit the `u32` count field.
pub fn encode_record<T: RawCodec>(values: &[T]) -> Result<Vec<u8>, PhysicsError> {
    let count = record_count(values.len())?;

    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    write_u32(&mut out, FORMAT_VERSION);
    write_u32(&mut out, count);
    for value in values {
        value.encode(&mut out);
    }
    Ok(out)
}

fn record_count(len: usize) -> Result<u32, PhysicsError> {
    u32::try_from(len).map_err(|_| PhysicsError::CapacityExceeded {
        resource: "record values",
        limit: u32::MAX as usize,
    })
}

/// Decode a framed record written by [`encode_record`]
pub fn decode_record<T: RawCodec>(bytes: &[u8]) -> Result<Vec<T>, PhysicsError> {
    let mut input = bytes;

    let magic = take::<4>(&mut input)?;
    if &magic != MAGIC {
        log::debug!("raw decode: bad magic {magic:?}");
        return Err(PhysicsError::DeserializationFailed);
    }

    let version = read_u32(&mut input)?;
    if version != FORMAT_VERSION {
        return Err(PhysicsError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let count = read_u32(&mut input)?;
    let mut values = Vec::new();
    for _ in 0..count {
        values.push(T::decode(&mut input)?);
    }

    if !input.is_empty() {
        log::debug!("raw decode: {} trailing bytes", input.len());
        return Err(PhysicsError::DeserializationFailed);
    }
    Ok(values)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestep::TimeStep;

    #[test]
    fn test_fp_layout() {
        let bytes = Fp::MINUS_ONE.to_raw_bytes();
        assert_eq!(bytes, (-65_536i64).to_le_bytes().to_vec());
        let mut input = bytes.as_slice();
        assert_eq!(Fp::decode(&mut input), Ok(Fp::MINUS_ONE));
        assert!(input.is_empty());
    }

    #[test]
    fn test_decode_advances_input() {
        let mut bytes = Vec::new();
        Vector3::from_int(1, 2, 3).encode(&mut bytes);
        Quaternion::IDENTITY.encode(&mut bytes);
        assert_eq!(bytes.len(), 24 + 32);

        let mut input = bytes.as_slice();
        assert_eq!(Vector3::decode(&mut input), Ok(Vector3::from_int(1, 2, 3)));
        assert_eq!(input.len(), 32);
        assert_eq!(Quaternion::decode(&mut input), Ok(Quaternion::IDENTITY));
        assert!(input.is_empty());
    }

    #[test]
    fn test_truncated_input_fails() {
        let bytes = Vector3::from_int(1, 2, 3).to_raw_bytes();
        let mut input = &bytes[..20];
        assert_eq!(
            Vector3::decode(&mut input),
            Err(PhysicsError::DeserializationFailed)
        );
        let mut empty: &[u8] = &[];
        assert_eq!(Fp::decode(&mut empty), Err(PhysicsError::DeserializationFailed));
    }

    #[test]
    fn test_settings_restore() {
        let spring = SpringSettings::advanced_only(Fp::ONE.half(), Fp::from_int(2));
        let mut input = &spring.to_raw_bytes()[..];
        assert_eq!(SpringSettings::decode(&mut input), Ok(spring));

        let mut limit = JointLimit::new(Fp::from_int(3), Fp::ONE.half(), Fp::ZERO);
        limit.set_limit_exceeded(true);
        let mut input = &limit.to_raw_bytes()[..];
        assert_eq!(JointLimit::decode(&mut input), Ok(limit));

        let material = Material::new(Fp::ONE, Fp::ONE.half(), Fp::from_decimal(2, 1));
        let mut input = &material.to_raw_bytes()[..];
        assert_eq!(Material::decode(&mut input), Ok(material));
    }

    #[test]
    fn test_motor_keeps_step_state() {
        let mut motor = Motor::new(Fp::from_int(10));
        motor.update(&TimeStep::from_hz(30));
        let mut input = &motor.to_raw_bytes()[..];
        let decoded = Motor::decode(&mut input);
        assert_eq!(decoded, Ok(motor));
    }

    #[test]
    fn test_invalid_bool_fails() {
        let mut bytes = JointLimit::default().to_raw_bytes();
        if let Some(last) = bytes.last_mut() {
            *last = 2;
        }
        let mut input = bytes.as_slice();
        assert_eq!(
            JointLimit::decode(&mut input),
            Err(PhysicsError::DeserializationFailed)
        );
    }

    #[test]
    fn test_record_round_trip() {
        let values = [Fp::ONE, Fp::PI, Fp::MIN, Fp::ZERO];
        let bytes = encode_record(&values).unwrap();
        assert_eq!(&bytes[..4], MAGIC);
        assert_eq!(decode_record::<Fp>(&bytes), Ok(values.to_vec()));
        assert_eq!(decode_record::<Fp>(&encode_record::<Fp>(&[]).unwrap()), Ok(Vec::new()));
    }

    #[test]
    fn test_record_rejects_bad_header() {
        let mut bytes = encode_record(&[Fp::ONE]).unwrap();
        bytes[0] = b'X';
        assert_eq!(
            decode_record::<Fp>(&bytes),
            Err(PhysicsError::DeserializationFailed)
        );

        let mut bytes = encode_record(&[Fp::ONE]).unwrap();
        bytes[4] = 9;
        assert_eq!(
            decode_record::<Fp>(&bytes),
            Err(PhysicsError::UnsupportedVersion {
                found: 9,
                expected: FORMAT_VERSION
            })
        );
    }

    #[test]
    fn test_record_rejects_trailing_and_short() {
        let mut bytes = encode_record(&[Fp::ONE]).unwrap();
        bytes.push(0);
        assert_eq!(
            decode_record::<Fp>(&bytes),
            Err(PhysicsError::DeserializationFailed)
        );

        let bytes = encode_record(&[Fp::ONE, Fp::ONE]).unwrap();
        assert_eq!(
            decode_record::<Fp>(&bytes[..bytes.len() - 1]),
            Err(PhysicsError::DeserializationFailed)
        );
    }

    #[test]
    fn test_record_count_limit() {
        assert_eq!(record_count(0), Ok(0));
        assert_eq!(record_count(u32::MAX as usize), Ok(u32::MAX));
        assert_eq!(
            record_count(u32::MAX as usize + 1),
            Err(PhysicsError::CapacityExceeded {
                resource: "record values",
                limit: u32::MAX as usize,
            })
        );
    }
}
