//! Flow sample generation.

/// `num_points` evenly spaced values from `start` to `end`, both included.
///
/// The last value is set to `end` exactly. A single point yields `[start]`.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    if num_points == 0 {
        return Vec::new();
    }
    if num_points == 1 {
        return vec![start];
    }

    let mut points = Vec::with_capacity(num_points);
    let delta = (end - start) / (num_points - 1) as f64;

    for i in 0..num_points {
        points.push(start + i as f64 * delta);
    }

    // Ensure exact endpoint
    points[num_points - 1] = end;
    points
}
