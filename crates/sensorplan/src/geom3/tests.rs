use super::*;
use nalgebra::{vector, Isometry3, Point3, Vector3};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

fn plane(n: Vector3<f64>, c: f64) -> Plane {
    Plane::new(n, c).unwrap()
}

fn ray(o: Vector3<f64>, d: Vector3<f64>) -> Ray {
    Ray::new(o, d).unwrap()
}

fn unit_vec() -> impl Strategy<Value = Vector3<f64>> {
    (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0)
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
        .prop_filter("non-degenerate direction", |v| v.norm() > 0.1)
        .prop_map(|v| v.normalize())
}

/// Signed area of an ordered polygon projected on `n` (positive = CCW about n).
fn signed_area_about(points: &[Vector3<f64>], n: &Vector3<f64>) -> f64 {
    let c = centroid(points);
    let mut acc = 0.0;
    for k in 0..points.len() {
        let a = points[k] - c;
        let b = points[(k + 1) % points.len()] - c;
        acc += 0.5 * a.cross(&b).dot(n);
    }
    acc
}

#[test]
fn plane_new_normalizes_and_keeps_the_plane() {
    let p = plane(vector![0.0, 2.0, 0.0], -4.0);
    assert!((p.normal - vector![0.0, 1.0, 0.0]).norm() < 1e-12);
    assert!((p.constant + 2.0).abs() < 1e-12);
    assert!(p.distance_to_point(&vector![5.0, 2.0, -1.0]).abs() < 1e-12);
    assert!((p.distance_to_point(&vector![0.0, 3.0, 0.0]) - 1.0).abs() < 1e-12);
}

#[test]
fn degenerate_constructors_are_rejected() {
    assert_eq!(
        Plane::new(Vector3::zeros(), 1.0),
        Err(GeomError::DegenerateNormal)
    );
    assert_eq!(
        Plane::new(vector![f64::NAN, 0.0, 0.0], 0.0),
        Err(GeomError::DegenerateNormal)
    );
    assert_eq!(
        Plane::from_normal_and_point(Vector3::zeros(), Vector3::zeros()),
        Err(GeomError::DegenerateNormal)
    );
    assert_eq!(
        Ray::new(Vector3::zeros(), Vector3::zeros()),
        Err(GeomError::DegenerateDirection)
    );
}

#[test]
fn plane_transform_maps_points_onto_image_plane() {
    let p = plane(vector![0.3, 1.0, -0.2], 1.5);
    let iso = Isometry3::new(vector![1.0, -2.0, 0.5], vector![0.3, 1.1, -0.4]);
    let image = p.transformed(&iso);
    // pick points on p: origin projected onto p plus in-plane offsets
    let base = -p.normal * p.constant;
    let u = p.normal.cross(&Vector3::x()).normalize();
    let v = p.normal.cross(&u);
    for (a, b) in [(0.0, 0.0), (1.0, 2.0), (-3.0, 0.5)] {
        let q = base + u * a + v * b;
        assert!(p.distance_to_point(&q).abs() < 1e-12);
        let moved = iso.transform_point(&Point3::from(q)).coords;
        assert!(image.distance_to_point(&moved).abs() < 1e-9);
    }
    assert!((image.normal.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn floor_and_wall_meet_along_the_room_edge() {
    let floor = plane(vector![0.0, 1.0, 0.0], 0.0);
    let wall_x = plane(vector![1.0, 0.0, 0.0], 10.0);
    let edge = intersect_planes(&floor, &wall_x).expect("perpendicular planes intersect");
    assert!((edge.direction - vector![0.0, 0.0, -1.0]).norm() < 1e-12);
    assert!((edge.origin - vector![-10.0, 0.0, 0.0]).norm() < 1e-12);
}

#[test]
fn parallel_coincident_and_degenerate_planes_do_not_intersect() {
    let a = plane(vector![0.0, 1.0, 0.0], 0.0);
    let b = plane(vector![0.0, -1.0, 0.0], 5.0);
    assert!(intersect_planes(&a, &b).is_none());
    assert!(intersect_planes(&a, &a).is_none());
    let nearly = plane(vector![0.0005, 1.0, 0.0], 2.0);
    assert!(intersect_planes(&a, &nearly).is_none());
    let zero = Plane {
        normal: Vector3::zeros(),
        constant: 1.0,
    };
    assert!(intersect_planes(&a, &zero).is_none());
    assert!(intersect_planes(&zero, &a).is_none());
}

#[test]
fn perpendicular_lines_meet() {
    let r1 = ray(Vector3::zeros(), Vector3::x());
    let r2 = ray(vector![2.0, -3.0, 0.0], Vector3::y());
    let p = intersect_rays(&r1, &r2).unwrap();
    assert!((p - vector![2.0, 0.0, 0.0]).norm() < 1e-12);
}

#[test]
fn intersection_behind_the_origin_is_valid() {
    let r1 = ray(vector![5.0, 0.0, 0.0], Vector3::x());
    let r2 = ray(vector![1.0, 1.0, 0.0], Vector3::y());
    let p = intersect_rays(&r1, &r2).unwrap();
    assert!((p - vector![1.0, 0.0, 0.0]).norm() < 1e-12);
}

#[test]
fn single_axis_direction_picks_a_working_secondary() {
    let r1 = ray(Vector3::zeros(), vector![1.0, 0.0, 1.0]);
    let r2 = ray(vector![3.0, 0.0, 0.0], Vector3::z());
    let p = intersect_rays(&r1, &r2).unwrap();
    assert!((p - vector![3.0, 0.0, 3.0]).norm() < 1e-9);
}

#[test]
fn parallel_coincident_and_skew_lines_do_not_intersect() {
    let r1 = ray(Vector3::zeros(), Vector3::x());
    let parallel = ray(vector![0.0, 1.0, 0.0], Vector3::x());
    let coincident = ray(vector![4.0, 0.0, 0.0], -Vector3::x());
    let skew = ray(vector![0.0, 0.0, 1.0], Vector3::y());
    assert!(intersect_rays(&r1, &parallel).is_none());
    assert!(intersect_rays(&r1, &coincident).is_none());
    assert!(intersect_rays(&r1, &skew).is_none());
    let zero = Ray {
        origin: Vector3::zeros(),
        direction: Vector3::zeros(),
    };
    assert!(intersect_rays(&r1, &zero).is_none());
}

#[test]
fn pairwise_intersections_skip_absent_pairs() {
    // two parallel lines crossed by a third: 2 points, not 3
    let rays = [
        ray(Vector3::zeros(), Vector3::x()),
        ray(vector![0.0, 0.0, 2.0], Vector3::x()),
        ray(vector![1.0, 0.0, 0.0], Vector3::z()),
    ];
    let pts = pairwise_intersections(&rays);
    assert_eq!(pts.len(), 2);
    assert!(pts.iter().any(|p| (p - vector![1.0, 0.0, 0.0]).norm() < 1e-12));
    assert!(pts.iter().any(|p| (p - vector![1.0, 0.0, 2.0]).norm() < 1e-12));
}

#[test]
fn scrambled_square_sorts_into_edges() {
    let mut pts = vec![
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 1.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ];
    let up = Vector3::y();
    sort_by_angle(&mut pts, &up);
    for k in 0..pts.len() {
        let edge = (pts[(k + 1) % pts.len()] - pts[k]).norm();
        assert!((edge - 1.0).abs() < 1e-12, "diagonal at {k}: {pts:?}");
    }
    assert!(signed_area_about(&pts, &up) > 0.0);
    assert!((area(&pts, 1.0) - 1.0).abs() < 1e-12);

    // flipping the normal flips the winding
    sort_by_angle(&mut pts, &(-up));
    assert!(signed_area_about(&pts, &up) < 0.0);
}

#[test]
fn point_opposite_the_reference_keeps_convex_order() {
    // second point lies exactly opposite the first with respect to the centroid
    let mut pts = vec![
        vector![1.0, 0.0, 0.0],
        vector![-1.0, 0.0, 0.0],
        vector![0.0, 0.0, 1.0],
        vector![0.0, 0.0, -1.0],
    ];
    sort_by_angle(&mut pts, &Vector3::y());
    let side = 2f64.sqrt();
    for k in 0..pts.len() {
        let edge = (pts[(k + 1) % pts.len()] - pts[k]).norm();
        assert!((edge - side).abs() < 1e-12, "{pts:?}");
    }
    assert!((area(&pts, 1.0) - 2.0).abs() < 1e-12);
}

#[test]
fn short_inputs_are_left_alone() {
    let mut two = vec![vector![1.0, 0.0, 0.0], vector![0.0, 0.0, 0.0]];
    sort_by_angle(&mut two, &Vector3::y());
    assert_eq!(two[0], vector![1.0, 0.0, 0.0]);
    assert_eq!(area(&two, 1.0), 0.0);
    assert_eq!(area(&[], 3.0), 0.0);
    assert_eq!(centroid(&[]), Vector3::zeros());
}

#[test]
fn area_scales_with_the_squared_unit() {
    let tri = [
        vector![0.0, 0.0, 0.0],
        vector![4.0, 0.0, 0.0],
        vector![0.0, 0.0, 3.0],
    ];
    assert!((area(&tri, 1.0) - 6.0).abs() < 1e-12);
    let feet = 3.28084;
    assert!((area(&tri, feet) - 6.0 * feet * feet).abs() < 1e-9);
}

#[test]
fn dedup_keeps_first_occurrences() {
    let mut pts = vec![
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![1e-12, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
    ];
    dedup_points(&mut pts, 1e-9);
    assert_eq!(pts, vec![vector![0.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]]);
}

#[test]
fn axis_order_follows_magnitude() {
    let order = Axis::by_decreasing_magnitude(&vector![0.1, -3.0, 2.0]);
    assert_eq!(order, [Axis::Y, Axis::Z, Axis::X]);
    assert_eq!(Axis::Z.others(), (Axis::X, Axis::Y));
}

proptest! {
    #[test]
    fn plane_intersection_lies_on_both_planes(
        n1 in unit_vec(),
        n2 in unit_vec(),
        c1 in -20.0f64..20.0,
        c2 in -20.0f64..20.0,
        t in -50.0f64..50.0,
    ) {
        prop_assume!(n1.cross(&n2).norm() > 0.05);
        let p1 = plane(n1, c1);
        let p2 = plane(n2, c2);
        let line = intersect_planes(&p1, &p2).expect("independent normals intersect");
        prop_assert!(line.direction.dot(&p1.normal).abs() < 1e-9);
        prop_assert!(line.direction.dot(&p2.normal).abs() < 1e-9);
        prop_assert!((line.direction.norm() - 1.0).abs() < 1e-12);
        let p = line.at(t);
        prop_assert!(p1.distance_to_point(&p).abs() < 1e-6);
        prop_assert!(p2.distance_to_point(&p).abs() < 1e-6);
    }

    #[test]
    fn coplanar_lines_meet_at_the_shared_point(
        x in (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0),
        d1 in unit_vec(),
        d2 in unit_vec(),
        s1 in -5.0f64..5.0,
        s2 in -5.0f64..5.0,
    ) {
        prop_assume!(d1.cross(&d2).norm() > 0.05);
        let x = Vector3::new(x.0, x.1, x.2);
        let r1 = ray(x - d1 * s1, d1);
        let r2 = ray(x - d2 * s2, d2);
        let p = intersect_rays(&r1, &r2).expect("coplanar non-parallel lines meet");
        prop_assert!((p - x).norm() < 1e-6);
    }

    #[test]
    fn skew_lines_have_no_intersection(
        d1 in unit_vec(),
        d2 in unit_vec(),
        lift in prop_oneof![0.01f64..3.0, -3.0f64..-0.01],
    ) {
        prop_assume!(d1.cross(&d2).norm() > 0.05);
        let n = d1.cross(&d2).normalize();
        let r1 = ray(Vector3::zeros(), d1);
        let r2 = ray(n * lift, d2);
        prop_assert!(intersect_rays(&r1, &r2).is_none());
    }

    #[test]
    fn area_ignores_rotation_and_reversal(
        mut angles in prop::collection::vec(0.0f64..TAU, 3..10),
        normal in unit_vec(),
        shift in 0usize..10,
    ) {
        angles.sort_by(f64::total_cmp);
        let u = normal.cross(&Vector3::x());
        let u = if u.norm() < 1e-3 { normal.cross(&Vector3::y()) } else { u }.normalize();
        let v = normal.cross(&u);
        let poly: Vec<Vector3<f64>> = angles
            .iter()
            .map(|a| u * (2.0 * a.cos()) + v * (2.0 * a.sin()))
            .collect();
        let base = area(&poly, 1.0);
        let mut rotated = poly.clone();
        rotated.rotate_left(shift % poly.len());
        let mut reversed = poly.clone();
        reversed.reverse();
        prop_assert!((area(&rotated, 1.0) - base).abs() < 1e-9);
        prop_assert!((area(&reversed, 1.0) - base).abs() < 1e-9);
    }

    #[test]
    fn sorting_a_shuffled_circle_polygon_recovers_convex_order(
        seed in 0u64..1000,
        count in 3usize..12,
        normal in unit_vec(),
    ) {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
        let u = normal.cross(&Vector3::z());
        let u = if u.norm() < 1e-3 { normal.cross(&Vector3::x()) } else { u }.normalize();
        let v = normal.cross(&u);
        let poly: Vec<Vector3<f64>> = (0..count)
            .map(|k| {
                let a = TAU * k as f64 / count as f64 + FRAC_PI_2 * 0.1;
                u * a.cos() + v * a.sin()
            })
            .collect();
        let mut shuffled = poly.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        sort_by_angle(&mut shuffled, &normal);
        let expected = (TAU / count as f64 / 2.0).sin() * 2.0;
        for k in 0..count {
            let edge = (shuffled[(k + 1) % count] - shuffled[k]).norm();
            prop_assert!((edge - expected).abs() < 1e-9);
        }
        prop_assert!(signed_area_about(&shuffled, &normal) > 0.0);
        prop_assert!((area(&shuffled, 1.0) - area(&poly, 1.0)).abs() < 1e-9);
    }
}
