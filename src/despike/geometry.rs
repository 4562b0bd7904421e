/// Euclidean magnitude of a 3-vector given by components
pub fn norm(x: f32, y: f32, z: f32) -> f32 {
    (x * x + y * y + z * z).sqrt()
}

pub fn norm_vec(v: [f32; 3]) -> f32 {
    norm(v[0], v[1], v[2])
}

/// Magnitude of the 3D cross product |v1 x v2| = |v1||v2|sin(theta).
/// Zero iff the vectors are parallel (including either being zero).
pub fn cross_norm(v1: [f32; 3], v2: [f32; 3]) -> f32 {
    let x = v1[1] * v2[2] - v1[2] * v2[1];
    let y = v1[2] * v2[0] - v1[0] * v2[2];
    let z = v1[0] * v2[1] - v1[1] * v2[0];
    norm(x, y, z)
}

pub fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn midpoint(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

/// Constant-velocity projection: assumes the step from `older` to `newer`
/// repeats once more, returning 2*newer - older
pub fn extrapolate(newer: [f32; 3], older: [f32; 3]) -> [f32; 3] {
    [
        2.0 * newer[0] - older[0],
        2.0 * newer[1] - older[1],
        2.0 * newer[2] - older[2],
    ]
}

/// Discrete second difference current - 2*previous + two_back, the 3-point
/// acceleration estimate the spike test classifies
pub fn second_difference(current: [f32; 3], previous: [f32; 3], two_back: [f32; 3]) -> [f32; 3] {
    [
        current[0] - 2.0 * previous[0] + two_back[0],
        current[1] - 2.0 * previous[1] + two_back[1],
        current[2] - 2.0 * previous[2] + two_back[2],
    ]
}

/// Map a sensor-space position onto a drawing surface of the given pixel
/// size. X/Y are scaled from the [-max, max] skeleton range and clamped to
/// the surface; sensor Y points up so it is negated. Z passes through.
pub fn scale_to(position: [f32; 3], width: f32, height: f32, max_x: f32, max_y: f32) -> [f32; 3] {
    [
        scale(width, max_x, position[0]),
        scale(height, max_y, -position[1]),
        position[2],
    ]
}

fn scale(max_pixel: f32, max_skeleton: f32, value: f32) -> f32 {
    let scaled = (max_pixel / max_skeleton / 2.0) * value + max_pixel / 2.0;
    scaled.clamp(0.0, max_pixel)
}
