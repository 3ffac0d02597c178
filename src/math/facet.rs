use glam::Vec3;

use crate::types::Triangle;

/// Unit normal of a facet, following the right-hand rule over (a, b, c)
///
/// Degenerate facets have a zero-length cross product; it is returned as-is
/// rather than divided by zero.
pub fn facet_normal(triangle: &Triangle) -> Vec3 {
    let [a, b, c] = triangle.vertices;
    let normal = (b - a).cross(c - a);
    let length = normal.length();
    if length > 0.0 {
        normal / length
    } else {
        normal
    }
}

/// Maps each normal component from [-1, 1] to [0, 1]
pub fn normal_to_color(normal: Vec3) -> [f32; 3] {
    ((normal + Vec3::ONE) * 0.5).to_array()
}

/// Static per-facet color derived purely from orientation
pub fn facet_color(triangle: &Triangle) -> [f32; 3] {
    normal_to_color(facet_normal(triangle))
}
