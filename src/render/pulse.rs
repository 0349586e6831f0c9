/// Scale offset added to the food per frame
const PULSE_STEP: f32 = 0.02;
/// Offset at which the pulse turns around
const PULSE_LIMIT: f32 = 0.1;

/// Breathing animation for the food, advanced once per rendered frame.
/// Purely cosmetic; the simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodPulse {
    offset: f32,
    direction: f32,
}

impl FoodPulse {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            direction: 1.0,
        }
    }

    pub fn advance(&mut self) {
        self.offset += PULSE_STEP * self.direction;
        if self.offset > PULSE_LIMIT || self.offset < -PULSE_LIMIT {
            self.direction = -self.direction;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current scale offset, roughly within `[-0.12, 0.12]`
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// True in the enlarged half of the cycle
    pub fn is_swollen(&self) -> bool {
        self.offset > 0.0
    }
}

impl Default for FoodPulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_oscillates() {
        let mut pulse = FoodPulse::new();
        let mut saw_swollen = false;
        let mut saw_shrunk = false;

        for _ in 0..100 {
            pulse.advance();
            assert!(pulse.offset().abs() <= PULSE_LIMIT + 2.0 * PULSE_STEP);
            saw_swollen |= pulse.is_swollen();
            saw_shrunk |= pulse.offset() < 0.0;
        }
        assert!(saw_swollen && saw_shrunk);
    }

    #[test]
    fn test_pulse_reset() {
        let mut pulse = FoodPulse::new();
        for _ in 0..7 {
            pulse.advance();
        }
        pulse.reset();
        assert_eq!(pulse, FoodPulse::new());
    }
}
