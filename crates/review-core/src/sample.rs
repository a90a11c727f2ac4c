//! View samples and their serialized form.
//!
//! A [`ViewSample`] is an immutable snapshot of an orbit-style viewport
//! camera: the orientation of the view, the point it orbits around and the
//! distance from that point. Two samples are equal only if every component is
//! bit-for-bit equal; there is no tolerance.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};

/// A snapshot of the viewport camera.
///
/// Equality compares the bit patterns of every float, so `0.0` and `-0.0`
/// differ and a NaN equals an identical NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewSample {
    /// View orientation (unit quaternion).
    #[serde(with = "rotation_string")]
    pub rotation: Quat,
    /// Point the view orbits around.
    pub location: Vec3,
    /// Distance from `location` to the eye.
    pub distance: f32,
}

impl PartialEq for ViewSample {
    fn eq(&self, other: &Self) -> bool {
        bits_eq(&self.rotation.to_array(), &other.rotation.to_array())
            && bits_eq(&self.location.to_array(), &other.location.to_array())
            && self.distance.to_bits() == other.distance.to_bits()
    }
}

impl Eq for ViewSample {}

fn bits_eq(a: &[f32], b: &[f32]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

impl Default for ViewSample {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            location: Vec3::ZERO,
            distance: 10.0,
        }
    }
}

impl ViewSample {
    /// Creates a new sample. Negative and NaN distances become zero.
    pub fn new(rotation: Quat, location: Vec3, distance: f32) -> Self {
        let distance = if distance.is_nan() || distance.is_sign_negative() {
            0.0
        } else {
            distance
        };
        Self {
            rotation,
            location,
            distance,
        }
    }

    /// Returns a copy with a different location.
    #[must_use]
    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }

    /// Returns a copy with a different distance.
    #[must_use]
    pub fn with_distance(self, distance: f32) -> Self {
        Self::new(self.rotation, self.location, distance)
    }
}

/// Encodes a rotation as `"w x y z"`.
///
/// Floats are written in their shortest round-trip form, so
/// [`decode_rotation`] reproduces the exact same bits.
pub fn encode_rotation(rotation: Quat) -> String {
    format!(
        "{} {} {} {}",
        rotation.w, rotation.x, rotation.y, rotation.z
    )
}

/// Decodes a rotation written by [`encode_rotation`].
///
/// The string is split on whitespace and must contain exactly four floats in
/// `w x y z` order.
pub fn decode_rotation(text: &str) -> Result<Quat> {
    let mut parts = [0.0_f32; 4];
    let mut count = 0;
    for token in text.split_whitespace() {
        if count == parts.len() {
            return Err(ReviewError::InvalidRotation(text.to_string()));
        }
        parts[count] = token
            .parse()
            .map_err(|_| ReviewError::InvalidRotation(text.to_string()))?;
        count += 1;
    }
    if count != parts.len() {
        return Err(ReviewError::InvalidRotation(text.to_string()));
    }
    let [w, x, y, z] = parts;
    Ok(Quat::from_xyzw(x, y, z, w))
}

mod rotation_string {
    use glam::Quat;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(rotation: &Quat, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_rotation(*rotation))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Quat, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::decode_rotation(&text).map_err(de::Error::custom)
    }
}
