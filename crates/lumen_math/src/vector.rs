//! Vector helpers used by the shading code.
//!
//! Everything here is a pure function of its inputs.

use crate::Vec3;

/// Normalize `v`, mapping a zero-length (or non-finite) vector to zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}

/// Refract `v` through a surface with normal `n` facing against `v`.
///
/// `eta` is the ratio n1/n2. Returns the zero vector on total internal
/// reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Vec3 {
    let cos_i = -v.dot(n);
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return Vec3::ZERO;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    v * eta + n * (eta * cos_i - cos_t)
}

/// Clamp each component to [0, 1].
#[inline]
pub fn clamp01(v: Vec3) -> Vec3 {
    v.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Build two unit vectors that form a right-handed orthonormal basis with `w`.
///
/// `w` must be normalized.
pub fn orthonormal_basis(w: Vec3) -> (Vec3, Vec3) {
    let helper = if w.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
    let v = normalize(w.cross(helper));
    let u = w.cross(v);
    (u, v)
}
