//! Vector optics: normalization, mirror reflection and Snell refraction.

use crate::Vec3;

/// Scale `v` so that its length equals `length`.
///
/// Normalizing a zero-length (or non-finite) vector has no meaningful
/// result, so it panics instead of leaking NaNs into the image.
#[inline]
pub fn normalize_to(v: Vec3, length: f32) -> Vec3 {
    let norm = v.length();
    assert!(
        norm > 0.0 && norm.is_finite(),
        "cannot normalize vector {v} of length {norm}"
    );
    v * (length / norm)
}

/// Reflect `i` about the normal `n`.
///
/// `reflect(I, N) = I - N * 2 * (I . N)`
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - n * 2.0 * i.dot(n)
}

/// Refract the unit direction `i` through a surface with outward normal `n`
/// separating vacuum from a medium of index `refractive_index`.
///
/// Rays arriving from inside the medium (`i . n > 0`) are handled by swapping
/// the indices and flipping the normal. Returns `Vec3::ZERO` when there is no
/// transmitted direction (total internal reflection).
pub fn refract(i: Vec3, n: Vec3, refractive_index: f32) -> Vec3 {
    let mut cosi = -i.dot(n).clamp(-1.0, 1.0);
    let mut etai = 1.0;
    let mut etat = refractive_index;
    let mut n = n;

    if cosi < 0.0 {
        // Inside the medium
        cosi = -cosi;
        std::mem::swap(&mut etai, &mut etat);
        n = -n;
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        i * eta + n * (eta * cosi - k.sqrt())
    }
}
