//! Debug-only checks for the invariants of values flowing through the engine.
//!
//! Every function here is a no-op in release builds

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(val.is_finite(), "should be finite; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn point3(p: impl Borrow<Point3>) {
    debug_assert_only!();
    let p = p.borrow();
    assert!(!p.is_nan(), "should not be nan; point: {p:?}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

/// Asserts that a hit record produced for `ray` was valid
#[inline(always)]
#[track_caller]
pub fn hit(ray: impl Borrow<Ray>, hit: impl Borrow<HitRecord>) {
    debug_assert_only!();

    let hit = hit.borrow();
    let ray = ray.borrow();

    point3(hit.pos);
    number(hit.dist);
    normal3(hit.normal);

    assert!(
        ray.interval().contains_dist(hit.dist),
        "hit dist {} not in interval {}",
        hit.dist,
        ray.interval()
    );

    let expected = ray.at(hit.dist);
    assert!(
        Point3::relative_eq(&hit.pos, &expected, EPSILON, RELATIVE),
        "hit position doesn't match ray at hit dist; hit_pos: {hit_pos:?}, dist: {dist}, ray: {ray:?}, ray_pos: {expected:?}",
        hit_pos = hit.pos,
        dist = hit.dist,
    );
}
