//! Per-frame simulation step
//!
//! Order matters: the rope phase advances first, the jump controller reads
//! the fresh phase while the body is still grounded, the body integrates,
//! and only then does the strand relax against the body's new hand
//! positions. Rendering is a separate, read-only pass.

use super::state::SimState;

/// Input commands applied at the top of a tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// New rope speed from the slider, if it moved this frame
    pub set_speed: Option<f32>,
    /// Start/pause toggle (button or spacebar)
    pub toggle_run: bool,
}

/// Advance the simulation by one bounded delta. Input is applied even while
/// paused (so the toggle works); everything else requires `running` and a
/// positive delta.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if input.toggle_run {
        state.running = !state.running;
        log::info!("{}", if state.running { "resumed" } else { "paused" });
    }
    if let Some(speed) = input.set_speed {
        state.config.set_speed(speed);
    }

    if !state.running || dt <= 0.0 {
        return;
    }

    state.elapsed += dt;

    state.rope.advance(dt, state.config.rope_speed);
    let phase_norm = state.rope.normalized_phase();

    state
        .jump
        .evaluate(phase_norm, &mut state.body, state.config.rope_speed);
    let stand_y = state.stand_y();
    state.body.integrate(dt, phase_norm, stand_y);

    state
        .rope
        .settle(dt, state.body.pos, state.viewport.ground_y);

    let width = state.viewport.width;
    state.environment.advance(dt, width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::{RopeVariant, Settings};

    const DT: f32 = 1.0 / 60.0;

    fn new_state(variant: RopeVariant) -> SimState {
        let settings = Settings {
            rope_variant: variant,
            ..Settings::default()
        };
        SimState::new(&settings, false, 800.0, 600.0, 1.0, 0)
    }

    #[test]
    fn test_paused_state_is_frozen() {
        let mut state = new_state(RopeVariant::Parametric);
        tick(&mut state, &TickInput { toggle_run: true, ..Default::default() }, DT);
        assert!(!state.running);

        let phase = state.rope.phase();
        let body_y = state.body.pos.y;
        let elapsed = state.elapsed;
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.rope.phase(), phase);
        assert_eq!(state.body.pos.y, body_y);
        assert_eq!(state.elapsed, elapsed);
    }

    #[test]
    fn test_toggle_works_while_paused() {
        let mut state = new_state(RopeVariant::Parametric);
        let toggle = TickInput { toggle_run: true, ..Default::default() };
        tick(&mut state, &toggle, DT);
        tick(&mut state, &toggle, DT);
        assert!(state.running);
    }

    #[test]
    fn test_speed_change_applies_while_paused() {
        let mut state = new_state(RopeVariant::Parametric);
        tick(&mut state, &TickInput { toggle_run: true, ..Default::default() }, DT);
        tick(
            &mut state,
            &TickInput { set_speed: Some(2.5), ..Default::default() },
            DT,
        );
        assert_eq!(state.config.rope_speed, 2.5);
    }

    #[test]
    fn test_zero_dt_changes_nothing_but_input() {
        let mut state = new_state(RopeVariant::Strand);
        let phase = state.rope.phase();
        let y = state.body.pos.y;
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.rope.phase(), phase);
        assert_eq!(state.body.pos.y, y);
    }

    /// At speed 1.0, 300 ticks at 60 Hz from rest must produce at least two
    /// completed jump cycles (left the ground and returned).
    #[test]
    fn test_two_jump_cycles_in_five_seconds() {
        let mut state = new_state(RopeVariant::Parametric);
        tick(
            &mut state,
            &TickInput { set_speed: Some(1.0), ..Default::default() },
            DT,
        );

        let mut completed_cycles = 0;
        let mut was_airborne = false;
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), DT);
            if !state.body.grounded {
                was_airborne = true;
            } else if was_airborne {
                completed_cycles += 1;
                was_airborne = false;
            }
            assert!(state.body.pos.y <= state.stand_y() + 1e-4);
        }
        assert!(
            completed_cycles >= 2,
            "expected two jump cycles, got {completed_cycles}"
        );
    }

    #[test]
    fn test_strand_variant_ticks_clean() {
        let mut state = new_state(RopeVariant::Strand);
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), DT);
        }
        match state.rope.geometry(state.body.pos) {
            crate::sim::RopeGeometry::Strand { points } => {
                for p in points {
                    assert!(p.pos.is_finite());
                    assert!(p.pos.y <= state.viewport.ground_y + 1e-3);
                }
            }
            _ => panic!("expected strand geometry"),
        }
    }

    #[test]
    fn test_phase_rate_matches_config() {
        let mut state = new_state(RopeVariant::Parametric);
        tick(
            &mut state,
            &TickInput { set_speed: Some(2.0), ..Default::default() },
            DT,
        );
        let before = state.rope.phase();
        tick(&mut state, &TickInput::default(), DT);
        let advanced = state.rope.phase() - before;
        assert!((advanced - DT * 2.0 * ANGULAR_SCALE).abs() < 1e-5);
    }

    #[test]
    fn test_clouds_drift_only_while_running() {
        let mut state = new_state(RopeVariant::Parametric);
        let x0 = state.environment.clouds[0].x;
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.environment.clouds[0].x > x0);

        tick(&mut state, &TickInput { toggle_run: true, ..Default::default() }, DT);
        let x1 = state.environment.clouds[0].x;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.environment.clouds[0].x, x1);
    }
}
