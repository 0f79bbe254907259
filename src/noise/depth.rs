use crate::math::{Mat4, Vec3};
use super::value_noise::fbm;

/// Shift applied to the surface xy before sampling, away from the origin
/// where the hash degenerates to zero
pub const NOISE_OFFSET: f32 = 100.0;
/// Rate at which the noise field scrolls through its third axis
pub const NOISE_TIME_SCALE: f32 = 0.3;

/// Depth displacement in [-1, 1) for a surface point at `time` seconds.
pub fn depth_offset(position: Vec3, time: f32) -> f32 {
    let sample = Vec3::new(
        position.x + NOISE_OFFSET,
        position.y + NOISE_OFFSET,
        time * NOISE_TIME_SCALE,
    );
    fbm(sample) * 2.0 - 1.0
}

/// Window-space depth the frag-depth shader writes for `position`.
///
/// The point is pushed along its local z by [`depth_offset`], projected by
/// `mvp`, and the NDC depth remapped from [-1, 1] to [0, 1].
pub fn displaced_depth(mvp: &Mat4, position: Vec3, time: f32) -> f32 {
    let offset = depth_offset(position, time);
    let [_, _, z, w] = mvp.transform_vec4([position.x, position.y, position.z + offset, 1.0]);
    (z / w) * 0.5 + 0.5
}
