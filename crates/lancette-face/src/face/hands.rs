use crate::coords::{Path, SurfaceMetrics, Vec2};

// Hand proportions, as fractions of the face radius. Blade tips sit at
// `top_padding + TIP * radius` from the surface top, which keeps a full
// sweep inside the reserved edge margin. The CAP constants place the
// quadratic control point slightly short of the tip so the cap flattens.

const HOUR_BASE_HALF_WIDTH: f32 = 0.018;
const HOUR_TIP_HALF_WIDTH: f32 = 0.009;
const HOUR_TIP: f32 = 0.48;
const HOUR_CAP: f32 = 0.46;

const MINUTE_BASE_HALF_WIDTH: f32 = 0.01;
const MINUTE_TIP_HALF_WIDTH: f32 = 0.008;
const MINUTE_TIP: f32 = 0.365;
const MINUTE_CAP: f32 = 0.345;

const SECOND_APEX: f32 = 0.26;
const SECOND_BASE: f32 = 0.34;
const SECOND_BASE_HALF_WIDTH: f32 = 0.05;

pub(crate) const HUB_RADIUS: f32 = 0.03;
pub(crate) const HOUR_RING_STROKE: f32 = 0.01;
pub(crate) const MINUTE_RING_STROKE: f32 = 0.02;

/// Hour blade in the unrotated (twelve o'clock) position.
pub(crate) fn hour_blade(m: SurfaceMetrics) -> Path {
    blade(m, HOUR_BASE_HALF_WIDTH, HOUR_TIP_HALF_WIDTH, HOUR_TIP, HOUR_CAP)
}

/// Minute blade: same construction as the hour blade, longer and narrower.
pub(crate) fn minute_blade(m: SurfaceMetrics) -> Path {
    blade(m, MINUTE_BASE_HALF_WIDTH, MINUTE_TIP_HALF_WIDTH, MINUTE_TIP, MINUTE_CAP)
}

/// Second hand: a filled triangular pointer, no ring.
pub(crate) fn second_pointer(m: SurfaceMetrics) -> Path {
    let r = m.radius;
    let c = m.center;
    Path::new()
        .move_to(Vec2::new(c.x, m.top_padding + SECOND_APEX * r))
        .line_to(Vec2::new(c.x - SECOND_BASE_HALF_WIDTH * r, m.top_padding + SECOND_BASE * r))
        .line_to(Vec2::new(c.x + SECOND_BASE_HALF_WIDTH * r, m.top_padding + SECOND_BASE * r))
        .close()
}

pub(crate) fn hour_tip_y(m: SurfaceMetrics) -> f32 {
    m.top_padding + HOUR_TIP * m.radius
}

pub(crate) fn minute_tip_y(m: SurfaceMetrics) -> f32 {
    m.top_padding + MINUTE_TIP * m.radius
}

/// Tapered blade shared by the hour and minute hands: flat base on the hub
/// circle, symmetric taper toward the tip, quadratic cap.
fn blade(m: SurfaceMetrics, base_hw: f32, tip_hw: f32, tip: f32, cap: f32) -> Path {
    let r = m.radius;
    let c = m.center;
    let base_y = c.y - HUB_RADIUS * r;
    let tip_y = m.top_padding + tip * r;
    let cap_y = m.top_padding + cap * r;

    Path::new()
        .move_to(Vec2::new(c.x - base_hw * r, base_y))
        .line_to(Vec2::new(c.x - tip_hw * r, tip_y))
        .quad_to(Vec2::new(c.x, cap_y), Vec2::new(c.x + tip_hw * r, tip_y))
        .line_to(Vec2::new(c.x + base_hw * r, base_y))
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Edges, PathVerb, Surface};

    fn metrics(size: f32) -> SurfaceMetrics {
        SurfaceMetrics::from_surface(Surface::new(size, size, Edges::default()))
    }

    fn assert_close(p: Vec2, x: f32, y: f32) {
        assert!((p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3, "{p:?} != ({x}, {y})");
    }

    // ── proportions ───────────────────────────────────────────────────────

    #[test]
    fn hour_blade_proportions() {
        // 200×200 surface: radius 100, center (100, 100), top padding 12.
        let m = metrics(200.0);
        let verbs = hour_blade(m).verbs().to_vec();
        assert_eq!(verbs.len(), 5);

        let (PathVerb::MoveTo(base_l), PathVerb::LineTo(tip_l), PathVerb::LineTo(base_r)) =
            (verbs[0], verbs[1], verbs[3])
        else {
            panic!("unexpected verb shape: {verbs:?}");
        };
        assert_close(base_l, 100.0 - 1.8, 100.0 - 3.0);
        assert_close(tip_l, 100.0 - 0.9, 12.0 + 48.0);
        assert_close(base_r, 100.0 + 1.8, 100.0 - 3.0);

        let PathVerb::QuadTo { ctrl, to } = verbs[2] else {
            panic!("expected quadratic cap, got {:?}", verbs[2]);
        };
        assert_close(ctrl, 100.0, 12.0 + 46.0);
        assert_close(to, 100.0 + 0.9, 12.0 + 48.0);

        assert_eq!(verbs[4], PathVerb::Close);
    }

    #[test]
    fn minute_blade_reaches_further_and_is_narrower() {
        let m = metrics(200.0);

        // Smaller y = closer to the surface top = longer hand.
        assert!(minute_tip_y(m) < hour_tip_y(m));

        let (PathVerb::MoveTo(h), PathVerb::MoveTo(mi)) =
            (hour_blade(m).verbs()[0], minute_blade(m).verbs()[0])
        else {
            panic!("blades start with MoveTo");
        };
        assert!((m.center.x - mi.x) < (m.center.x - h.x));
    }

    #[test]
    fn second_pointer_is_a_closed_triangle() {
        let m = metrics(200.0);
        let verbs = second_pointer(m).verbs().to_vec();
        assert_eq!(verbs.len(), 4);

        let (PathVerb::MoveTo(apex), PathVerb::LineTo(left), PathVerb::LineTo(right)) =
            (verbs[0], verbs[1], verbs[2])
        else {
            panic!("unexpected verb shape: {verbs:?}");
        };
        assert_close(apex, 100.0, 12.0 + 26.0);
        assert_close(left, 100.0 - 5.0, 12.0 + 34.0);
        assert_close(right, 100.0 + 5.0, 12.0 + 34.0);
        assert_eq!(verbs[3], PathVerb::Close);
    }

    #[test]
    fn blades_are_symmetric_about_the_center_line() {
        let m = metrics(200.0);
        for path in [hour_blade(m), minute_blade(m)] {
            // Blade points run left edge then right edge: the x offsets
            // mirror when read from both ends.
            let xs: Vec<f32> = path.points().map(|p| p.x - m.center.x).collect();
            for (a, b) in xs.iter().zip(xs.iter().rev()) {
                assert!((a + b).abs() < 1e-3, "asymmetric outline: {xs:?}");
            }
        }
    }

    // ── scaling ───────────────────────────────────────────────────────────

    #[test]
    fn doubling_the_surface_doubles_every_coordinate() {
        let small = metrics(200.0);
        let large = metrics(400.0);

        for (build, name) in [
            (hour_blade as fn(SurfaceMetrics) -> Path, "hour"),
            (minute_blade, "minute"),
            (second_pointer, "second"),
        ] {
            let a: Vec<Vec2> = build(small).points().collect();
            let b: Vec<Vec2> = build(large).points().collect();
            assert_eq!(a.len(), b.len(), "{name}");
            for (p, q) in a.iter().zip(&b) {
                assert!((q.x - p.x * 2.0).abs() < 1e-3, "{name} x");
                assert!((q.y - p.y * 2.0).abs() < 1e-3, "{name} y");
            }
        }
    }

    // ── degenerate radius ─────────────────────────────────────────────────

    #[test]
    fn zero_radius_yields_zero_width_hands() {
        let m = SurfaceMetrics::from_surface(Surface::new(10.0, 10.0, Edges::all(20.0)));
        assert_eq!(m.radius, 0.0);

        // Every radius-scaled offset vanishes: the outlines collapse onto
        // the vertical center line and enclose no area.
        for path in [hour_blade(m), minute_blade(m), second_pointer(m)] {
            for p in path.points() {
                assert_eq!(p.x, m.center.x);
            }
        }
    }
}
