//! Arc geometry resolution.
//!
//! Symbol records describe an arc redundantly: center, both endpoints, and
//! start/end angles in tenths of a degree. The radius is recovered from the
//! center-to-start distance (the data is assumed consistent; we do not
//! check the end point agrees). The sweep direction comes from the raw
//! angle ordering - deliberately the unflipped values, even though the
//! rendered points live in display space, because that is the orientation
//! convention the library format uses.

use glam::DVec2;

use crate::types::DisplayPoint;

/// A two-point circular arc, consumable by any backend with elliptical
/// arc path segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub start: DisplayPoint,
    pub end: DisplayPoint,
    pub radius: f64,
    /// 1 when the arc sweeps clockwise in display space, else 0.
    pub sweep: u8,
}

/// Compute radius and sweep for an arc. Points are display-space; the
/// angles are the raw tenth-degree record values.
pub fn resolve(
    center: DisplayPoint,
    start: DisplayPoint,
    end: DisplayPoint,
    start_angle: i32,
    end_angle: i32,
) -> ArcPath {
    let c = DVec2::new(center.x as f64, center.y as f64);
    let s = DVec2::new(start.x as f64, start.y as f64);
    let radius = c.distance(s);
    let sweep = if start_angle > end_angle { 1 } else { 0 };

    ArcPath {
        start,
        end,
        radius,
        sweep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_center_to_start_distance() {
        let arc = resolve(
            DisplayPoint::new(0, 0),
            DisplayPoint::new(30, 40),
            DisplayPoint::new(50, 0),
            0,
            900,
        );
        assert_eq!(arc.radius, 50.0);
    }

    #[test]
    fn ascending_angles_sweep_counterclockwise() {
        let arc = resolve(
            DisplayPoint::new(0, 0),
            DisplayPoint::new(100, 0),
            DisplayPoint::new(0, -100),
            0,
            900,
        );
        assert_eq!(arc.sweep, 0);
    }

    #[test]
    fn descending_angles_sweep_clockwise() {
        let arc = resolve(
            DisplayPoint::new(0, 0),
            DisplayPoint::new(0, -100),
            DisplayPoint::new(100, 0),
            900,
            0,
        );
        assert_eq!(arc.sweep, 1);
    }

    #[test]
    fn coincident_center_and_start_gives_zero_radius() {
        let p = DisplayPoint::new(12, -7);
        let arc = resolve(p, p, p, 0, 0);
        assert_eq!(arc.radius, 0.0);
        assert_eq!(arc.sweep, 0);
    }
}
