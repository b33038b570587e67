// Position eases faster than heading: snappy tracking, smooth rotation.
pub const POSITION_EASE: f64 = 0.35;
pub const HEADING_EASE: f64 = 0.15;
// Per-axis movement below this is jitter and does not rotate the marker.
pub const MOVE_THRESHOLD: f64 = 0.5;
// atan2 gives 0 for rightward travel; the arrow artwork points up.
pub const HEADING_OFFSET_DEG: f64 = 90.0;
// Arrow tip inside the 32x32 marker box.
pub const TIP_OFFSET: (f64, f64) = (16.0, 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

// `observe` ingests raw pointer samples, `step` advances the rendered values
// one frame toward their targets. No DOM here, so the math tests on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowerState {
    pub position: Point,
    pub target_position: Point,
    pub heading: f64,
    pub target_heading: f64,
    last_sample: Point,
}

impl FollowerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw pointer sample. The target position and last sample
    /// always move; the target heading only moves when the delta clears the
    /// noise threshold, and only by the shortest angular path so the rotation
    /// never snaps across the 0°/360° seam.
    pub fn observe(&mut self, x: f64, y: f64) {
        let dx = x - self.last_sample.x;
        let dy = y - self.last_sample.y;

        if dx.abs() > MOVE_THRESHOLD || dy.abs() > MOVE_THRESHOLD {
            let raw = dy.atan2(dx).to_degrees() + HEADING_OFFSET_DEG;
            self.target_heading += wrap_degrees(raw - self.target_heading);
        }

        self.target_position = Point { x, y };
        self.last_sample = Point { x, y };
    }

    /// One frame of exponential smoothing: each call covers a fixed fraction
    /// of the remaining distance, approaching but never overshooting.
    pub fn step(&mut self) {
        self.position.x += (self.target_position.x - self.position.x) * POSITION_EASE;
        self.position.y += (self.target_position.y - self.position.y) * POSITION_EASE;
        self.heading += (self.target_heading - self.heading) * HEADING_EASE;
    }

    // CSS transform anchoring the arrow tip on the rendered position.
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg)",
            self.position.x - TIP_OFFSET.0,
            self.position.y - TIP_OFFSET.1,
            self.heading
        )
    }
}

// Normalize an angular delta into (-180, 180].
fn wrap_degrees(mut delta: f64) -> f64 {
    while delta > 180.0 {
        delta -= 360.0;
    }
    while delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn first_step_covers_fixed_fraction() {
        let mut state = FollowerState::new();
        state.observe(200.0, 150.0);
        state.step();
        assert!((state.position.x - 70.0).abs() < EPSILON);
        assert!((state.position.y - 52.5).abs() < EPSILON);
    }

    #[test]
    fn position_and_heading_converge_after_motion_stops() {
        let mut state = FollowerState::new();
        state.observe(200.0, 150.0);
        for _ in 0..200 {
            state.step();
        }
        assert!((state.position.x - state.target_position.x).abs() < EPSILON);
        assert!((state.position.y - state.target_position.y).abs() < EPSILON);
        assert!((state.heading - state.target_heading).abs() < EPSILON);
    }

    #[test]
    fn rightward_travel_maps_to_ninety_degrees() {
        let mut state = FollowerState::new();
        state.observe(100.0, 0.0);
        assert!((state.target_heading - 90.0).abs() < EPSILON);
    }

    #[test]
    fn sub_threshold_move_keeps_heading_but_updates_position() {
        let mut state = FollowerState::new();
        state.observe(100.0, 0.0);
        let heading_before = state.target_heading;

        // 0.3 on both axes is under the 0.5 noise threshold.
        state.observe(100.3, 0.3);
        assert_eq!(state.target_heading, heading_before);
        assert_eq!(state.target_position, Point { x: 100.3, y: 0.3 });
    }

    #[test]
    fn heading_never_jumps_more_than_half_a_turn() {
        let mut state = FollowerState::new();
        // Spiral the pointer through several full revolutions.
        let mut previous = state.target_heading;
        for i in 0..100 {
            let angle = (i as f64) * 0.4;
            let radius = 50.0 + i as f64;
            state.observe(radius * angle.cos(), radius * angle.sin());
            assert!(
                (state.target_heading - previous).abs() <= 180.0 + EPSILON,
                "heading jumped {} -> {}",
                previous,
                state.target_heading
            );
            previous = state.target_heading;
        }
    }

    #[test]
    fn heading_unwraps_across_the_seam() {
        let mut state = FollowerState::new();
        // Travel left: raw 180° + 90° offset = 270°, but the shortest path
        // from 0° is -90°, so the unwrapped target goes negative.
        state.observe(-100.0, 0.0);
        assert!((state.target_heading + 90.0).abs() < EPSILON);
        // A slight downward-left nudge pushes the raw angle across the ±180°
        // seam; the accumulated target must stay continuous near -90° instead
        // of snapping toward +264°.
        state.observe(-200.0, 10.0);
        assert!((state.target_heading + 90.0).abs() < 45.0);
    }

    #[test]
    fn smoothing_never_overshoots() {
        let mut state = FollowerState::new();
        state.observe(100.0, 0.0);
        let mut last_distance = f64::INFINITY;
        for _ in 0..50 {
            state.step();
            let distance = (state.target_position.x - state.position.x).abs();
            assert!(distance <= last_distance);
            assert!(state.position.x <= state.target_position.x + EPSILON);
            last_distance = distance;
        }
    }

    #[test]
    fn wrap_degrees_is_half_open() {
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(540.0), 180.0);
        assert!((wrap_degrees(-190.0) - 170.0).abs() < EPSILON);
        assert!((wrap_degrees(190.0) + 170.0).abs() < EPSILON);
    }

    #[test]
    fn transform_anchors_the_arrow_tip() {
        let state = FollowerState::new();
        assert_eq!(state.transform(), "translate3d(-16px, -2px, 0) rotate(0deg)");
    }
}
