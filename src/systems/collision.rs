//! Collision Resolver - circle/circle contacts for the active body
//!
//! Contacts are solved as a 1D elastic collision along the line between the
//! centres. Both bodies leave the contact moving along that line only: the
//! tangential part of their velocities is dropped. Only the active body is
//! pushed out of the overlap.

use crate::body::Body;
use crate::merge::{merge_into, MergeState};

/// Counters gathered while resolving one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub pairs_checked: u32,
    pub contacts: u32,
    pub merges: u32,
}

/// Collide `bodies[active]` against every other live body, in registry order.
///
/// Every contact feeds the pair's streak counter; the contact that reaches the
/// threshold merges the other body into the active one.
pub fn resolve_collisions(
    bodies: &mut [Body],
    active: usize,
    merge: &mut MergeState,
    stats: &mut ContactStats,
) {
    for other in 0..bodies.len() {
        if other == active || bodies[other].absorbed {
            continue;
        }
        stats.pairs_checked += 1;

        let (a, b) = pair_mut(bodies, active, other);
        if !collide(a, b) {
            continue;
        }
        stats.contacts += 1;

        if merge.record_contact(active, other) {
            merge_into(a, b);
            merge.arm_split();
            stats.merges += 1;
            console_log!(
                "merge: body {} absorbed body {} (radius {:.1}, mass {:.2}, color {})",
                active,
                other,
                a.radius,
                a.mass,
                a.color
            );
        }
    }
}

/// Resolve one pair if the circles touch. Returns whether they did.
///
/// `a` is the active body: it gets pushed back by the full overlap, `b` stays put.
pub fn collide(a: &mut Body, b: &mut Body) -> bool {
    let dist = (a.x - b.x).hypot(a.y - b.y);
    if dist > a.radius + b.radius {
        return false;
    }

    // Coincident centres give angle 0.
    let angle = (b.y - a.y).atan2(b.x - a.x);
    let (sin, cos) = angle.sin_cos();

    let u1 = a.vx * cos + a.vy * sin;
    let u2 = b.vx * cos + b.vy * sin;

    let m1 = a.mass;
    let m2 = b.mass;
    let v1 = (u1 * (m1 - m2) + 2.0 * m2 * u2) / (m1 + m2);
    let v2 = (u2 * (m2 - m1) + 2.0 * m1 * u1) / (m1 + m2);

    a.vx = v1 * cos;
    a.vy = v1 * sin;
    b.vx = v2 * cos;
    b.vy = v2 * sin;

    let overlap = a.radius + b.radius - dist;
    a.x -= overlap * cos;
    a.y -= overlap * sin;

    true
}

/// Two distinct bodies borrowed mutably at once, in argument order.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
