use super::action::{Direction, Velocity};
use super::state::{Lifecycle, SimulationState};

/// Record a direction request for the next tick.
///
/// Accepted only while the run is `Running` and when the request does not
/// point straight back along the currently applied velocity. An accepted
/// request replaces any earlier one in the same tick window. Rejections are
/// silent; the return value only reports whether the slot was written.
pub fn apply_direction(state: &mut SimulationState, requested: Direction) -> bool {
    if state.lifecycle != Lifecycle::Running {
        return false;
    }

    let requested = Velocity::from(requested);
    if requested.is_reverse_of(state.velocity) {
        return false;
    }

    state.pending_velocity = Some(requested);
    true
}
