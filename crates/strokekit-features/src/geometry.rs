//! Point-sequence simplification
//!
//! Douglas-Peucker reduction of stroke samples. The perpendicular distance
//! takes its numerator from the cross product in the XY plane while the
//! segment length in the denominator is measured in 3D, so a point displaced
//! only along Z is considered to lie on the segment. Feature values stored
//! from earlier drawings depend on this formula.

use strokekit_core::Point3D;

/// Distance from `point` to the line through `start` and `end`
///
/// A degenerate segment (`start == end`) yields the Euclidean distance from
/// `point` to `start`.
pub fn perpendicular_distance(point: &Point3D, start: &Point3D, end: &Point3D) -> f64 {
    if start == end {
        return point.distance_to(start);
    }

    let numerator = ((end.x - start.x) * (start.y - point.y)
        - (start.x - point.x) * (end.y - start.y))
        .abs();
    let denominator = start.distance_to(end);
    numerator / denominator
}

/// Simplify a point sequence with the Douglas-Peucker algorithm
///
/// Sequences of two points or fewer are returned unchanged. The result is a
/// subsequence of `points` that always keeps the first and last point.
/// Ranges are split from an explicit work stack, so long strokes do not
/// grow the call stack.
pub fn simplify(points: &[Point3D], epsilon: f64) -> Vec<Point3D> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut ranges = vec![(0, last)];
    while let Some((start, end)) = ranges.pop() {
        if end - start < 2 {
            continue;
        }

        let mut dmax = f64::NEG_INFINITY;
        let mut index = start + 1;
        for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
            let d = perpendicular_distance(point, &points[start], &points[end]);
            if d > dmax {
                index = i;
                dmax = d;
            }
        }

        if dmax > epsilon {
            keep[index] = true;
            ranges.push((index, end));
            ranges.push((start, index));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then_some(*p))
        .collect()
}

/// Sum of consecutive Euclidean distances
pub fn path_length(points: &[Point3D]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3D {
        Point3D::new(x, y, z)
    }

    #[test]
    fn test_short_sequences_unchanged() {
        assert!(simplify(&[], 0.01).is_empty());
        let one = vec![p(1.0, 2.0, 3.0)];
        assert_eq!(simplify(&one, 0.01), one);
        let two = vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)];
        assert_eq!(simplify(&two, 0.01), two);
    }

    #[test]
    fn test_collinear_points_collapse() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0)];
        assert_eq!(simplify(&pts, 0.01), vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_corner_is_kept() {
        let pts = vec![p(0.0, 0.0, 0.0), p(0.5, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
        let simplified = simplify(&pts, 0.01);
        assert_eq!(simplified, vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_degenerate_segment_uses_point_distance() {
        let a = p(0.0, 0.0, 0.0);
        assert_eq!(perpendicular_distance(&p(0.0, 3.0, 4.0), &a, &a), 5.0);
    }

    #[test]
    fn test_z_offset_ignored_by_numerator() {
        // The cross product only sees X and Y: a point lifted along Z alone
        // sits "on" the segment and is dropped.
        let start = p(0.0, 0.0, 0.0);
        let end = p(2.0, 0.0, 0.0);
        assert_eq!(perpendicular_distance(&p(1.0, 0.0, 5.0), &start, &end), 0.0);

        let pts = vec![start, p(1.0, 0.0, 5.0), end];
        assert_eq!(simplify(&pts, 0.01), vec![start, end]);
    }

    #[test]
    fn test_denominator_includes_z() {
        let start = p(0.0, 0.0, 0.0);
        let end = p(3.0, 0.0, 4.0);
        // cross = |3 * (0 - 1)| = 3, length = 5
        let d = perpendicular_distance(&p(0.0, 1.0, 0.0), &start, &end);
        assert!((d - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_long_zigzag_keeps_every_vertex() {
        // Each split peels off a single point, the deepest case for the
        // range stack.
        let pts: Vec<Point3D> = (0..10_000)
            .map(|i| p(i as f64, (i % 2) as f64, 0.0))
            .collect();
        assert_eq!(simplify(&pts, 0.01), pts);
    }

    #[test]
    fn test_negative_epsilon_keeps_everything() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        assert_eq!(simplify(&pts, -1.0), pts);
    }

    #[test]
    fn test_path_length() {
        let pts = vec![p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0), p(3.0, 4.0, 2.0)];
        assert_eq!(path_length(&pts), 7.0);
        assert_eq!(path_length(&pts[..1]), 0.0);
    }
}
