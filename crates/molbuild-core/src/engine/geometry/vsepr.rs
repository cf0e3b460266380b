use nalgebra::Vector3;
use std::f64::consts::TAU;

/// Ideal unit directions for `count` substituents around a center atom.
///
/// This is the VSEPR heuristic reduced to a lookup by neighbor count:
///
/// - 1: a single point along +x
/// - 2: linear (+x, -x)
/// - 3: trigonal planar, 120 degrees apart in the x-y plane
/// - 4: tetrahedral corners
/// - 5: trigonal bipyramid (+-y axial, three equatorial in the x-z plane)
/// - 6: octahedral (+-x, +-y, +-z)
/// - any other count: a regular polygon in the x-y plane
///
/// Directions are unit vectors; callers scale them by the bond-length
/// constant. The order is fixed so that neighbors, taken in bond-list order,
/// consume directions deterministically.
pub fn ideal_directions(count: usize) -> Vec<Vector3<f64>> {
    match count {
        0 => Vec::new(),
        1 => vec![Vector3::x()],
        2 => vec![Vector3::x(), -Vector3::x()],
        3 => polygon_xy(3),
        4 => {
            let k = 1.0 / 3.0_f64.sqrt();
            vec![
                Vector3::new(k, k, k),
                Vector3::new(k, -k, -k),
                Vector3::new(-k, k, -k),
                Vector3::new(-k, -k, k),
            ]
        }
        5 => {
            let mut directions = vec![Vector3::y(), -Vector3::y()];
            directions.extend(polygon_xz(3));
            directions
        }
        6 => vec![
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ],
        n => polygon_xy(n),
    }
}

/// `n` points evenly spaced on the unit circle in the x-y plane, starting at
/// +x, at angles `2*pi*i/n`.
fn polygon_xy(n: usize) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Vector3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect()
}

/// As [`polygon_xy`], but in the x-z plane (equatorial ring for the trigonal
/// bipyramid).
fn polygon_xz(n: usize) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Vector3::new(angle.cos(), 0.0, angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_unit(v: &Vector3<f64>) {
        assert!((v.norm() - 1.0).abs() < EPSILON, "not a unit vector: {v}");
    }

    #[test]
    fn zero_neighbors_yield_no_directions() {
        assert!(ideal_directions(0).is_empty());
    }

    #[test]
    fn one_neighbor_sits_on_positive_x() {
        assert_eq!(ideal_directions(1), vec![Vector3::x()]);
    }

    #[test]
    fn two_neighbors_are_colinear() {
        let directions = ideal_directions(2);
        assert_eq!(directions[0], -directions[1]);
    }

    #[test]
    fn three_neighbors_are_planar_at_120_degrees() {
        let directions = ideal_directions(3);
        assert_eq!(directions.len(), 3);
        for v in &directions {
            assert_unit(v);
            assert!(v.z.abs() < EPSILON);
        }
        assert!((directions[0].dot(&directions[1]) + 0.5).abs() < EPSILON);
        assert!((directions[1].dot(&directions[2]) + 0.5).abs() < EPSILON);
    }

    #[test]
    fn four_neighbors_form_a_regular_tetrahedron() {
        let directions = ideal_directions(4);
        assert_eq!(directions.len(), 4);
        for (i, a) in directions.iter().enumerate() {
            assert_unit(a);
            // Even number of negative components per corner.
            let negatives = [a.x, a.y, a.z].iter().filter(|c| **c < 0.0).count();
            assert_eq!(negatives % 2, 0);
            for b in &directions[i + 1..] {
                assert!((a.dot(b) + 1.0 / 3.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn five_neighbors_form_a_trigonal_bipyramid() {
        let directions = ideal_directions(5);
        assert_eq!(directions[0], Vector3::y());
        assert_eq!(directions[1], -Vector3::y());
        for equatorial in &directions[2..] {
            assert_unit(equatorial);
            assert!(equatorial.y.abs() < EPSILON);
        }
    }

    #[test]
    fn six_neighbors_form_an_octahedron() {
        let directions = ideal_directions(6);
        assert_eq!(directions.len(), 6);
        for v in &directions {
            assert_unit(v);
            // Axis-aligned.
            let nonzero = [v.x, v.y, v.z].iter().filter(|c| c.abs() > EPSILON).count();
            assert_eq!(nonzero, 1);
        }
    }

    #[test]
    fn larger_counts_fall_back_to_a_polygon() {
        let directions = ideal_directions(8);
        assert_eq!(directions.len(), 8);
        for (i, v) in directions.iter().enumerate() {
            assert_unit(v);
            assert!(v.z.abs() < EPSILON);
            let angle = TAU * i as f64 / 8.0;
            assert!((v.x - angle.cos()).abs() < EPSILON);
            assert!((v.y - angle.sin()).abs() < EPSILON);
        }
    }
}
