use cylmesh::{group_into_rings, CylindricalPoint, DEFAULT_RING_TOL};

fn cp(theta: f64, r: f64, z: f64) -> CylindricalPoint {
    CylindricalPoint::new(theta, r, z)
}

#[test]
fn groups_by_z_within_tolerance() {
    let points = vec![
        cp(0.0, 1.0, 0.0),
        cp(1.0, 1.0, 5.0),
        cp(2.0, 1.0, 0.05),
        cp(3.0, 1.0, 5.08),
        cp(-1.0, 1.0, 10.0),
    ];

    let rings = group_into_rings(&points, DEFAULT_RING_TOL);
    assert_eq!(rings.len(), 3);
    assert_eq!(rings[0].len(), 2);
    assert_eq!(rings[1].len(), 2);
    assert_eq!(rings[2].len(), 1);
}

#[test]
fn output_is_a_partition() {
    let points = vec![
        cp(0.3, 2.0, 0.0),
        cp(-0.7, 2.0, 1.0),
        cp(2.1, 2.0, 0.02),
        cp(0.0, 2.0, 1.09),
        cp(1.5, 2.0, 2.5),
        cp(-2.0, 2.0, 0.08),
    ];

    let rings = group_into_rings(&points, DEFAULT_RING_TOL);
    let total: usize = rings.iter().map(|r| r.len()).sum();
    assert_eq!(total, points.len());

    // Every input point appears exactly once.
    for p in &points {
        let hits: usize = rings
            .iter()
            .map(|ring| ring.points().iter().filter(|&&q| q == *p).count())
            .sum();
        assert_eq!(hits, 1);
    }
}

#[test]
fn rings_sorted_by_z_and_members_by_theta() {
    let points = vec![
        cp(2.0, 1.0, 8.0),
        cp(-1.0, 1.0, 8.0),
        cp(3.0, 1.0, 0.0),
        cp(0.5, 1.0, 8.0),
        cp(-3.0, 1.0, 0.0),
    ];

    let rings = group_into_rings(&points, DEFAULT_RING_TOL);
    assert_eq!(rings.len(), 2);
    assert!(rings[0].representative_z() < rings[1].representative_z());
    for ring in &rings {
        let thetas: Vec<f64> = ring.points().iter().map(|p| p.theta).collect();
        assert!(thetas.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn membership_uses_first_point_as_reference() {
    // 0.0 and 0.1 both sit within the tolerance of the first point; 0.18
    // does not, even though it is within tolerance of 0.1. Single-link
    // grouping against the first-picked z, no transitive chaining.
    let points = vec![cp(0.0, 1.0, 0.0), cp(1.0, 1.0, 0.1), cp(2.0, 1.0, 0.18)];

    let rings = group_into_rings(&points, 0.1);
    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0].len(), 2);
    assert_eq!(rings[1].len(), 1);
}

#[test]
fn empty_input_gives_no_rings() {
    let rings = group_into_rings(&[], DEFAULT_RING_TOL);
    assert!(rings.is_empty());
}
