#![allow(missing_docs)]
//! Property tests for AABB algebra and shape bounds.

use keel_geom::{Aabb, Circle, Polygon, Rot, Shape, Transform, Vec2};
use proptest::prelude::*;

fn arb_aabb() -> impl Strategy<Value = Aabb> {
    (
        -100.0f32..100.0,
        -100.0f32..100.0,
        0.0f32..50.0,
        0.0f32..50.0,
    )
        .prop_map(|(x, y, w, h)| Aabb::new(Vec2::new(x, y), Vec2::new(x + w, y + h)))
}

proptest! {
    #[test]
    fn union_contains_both_inputs(a in arb_aabb(), b in arb_aabb()) {
        let u = a.union(&b);
        prop_assert!(u.contains(&a));
        prop_assert!(u.contains(&b));
    }

    #[test]
    fn union_commutes(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn overlap_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn inflate_preserves_containment(a in arb_aabb(), m in 0.0f32..10.0) {
        prop_assert!(a.inflate(m).contains(&a));
    }

    #[test]
    fn circle_aabb_contains_sampled_boundary(
        cx in -10.0f32..10.0,
        cy in -10.0f32..10.0,
        r in 0.1f32..5.0,
        angle in -3.1f32..3.1,
    ) {
        let shape = Shape::from(Circle::offset(Vec2::new(cx, cy), r));
        let xf = Transform::new(Vec2::new(1.0, -2.0), Rot::from_angle(angle));
        let aabb = shape.compute_aabb(&xf);
        let center = xf.apply_point(&Vec2::new(cx, cy));
        for k in 0..8 {
            let theta = core::f32::consts::FRAC_PI_4 * k as f32;
            let p = center.add(&Vec2::new(
                r * libm::cosf(theta),
                r * libm::sinf(theta),
            ));
            let tolerance = Aabb::from_center_half_extents(p, 1.0e-3, 1.0e-3);
            prop_assert!(aabb.overlaps(&tolerance));
        }
    }

    #[test]
    fn polygon_aabb_contains_all_vertices(
        hx in 0.1f32..5.0,
        hy in 0.1f32..5.0,
        angle in -3.1f32..3.1,
        tx in -10.0f32..10.0,
    ) {
        let poly = Polygon::boxed(hx, hy);
        let xf = Transform::new(Vec2::new(tx, 0.0), Rot::from_angle(angle));
        let aabb = poly.compute_aabb(&xf);
        for v in poly.vertices() {
            let p = xf.apply_point(v);
            let probe = Aabb::from_center_half_extents(p, 1.0e-4, 1.0e-4);
            prop_assert!(aabb.overlaps(&probe));
        }
    }
}
