use crate::error::Error;

#[derive(Debug, Clone)]
pub struct CompositorConfig {
    /// Rotation applied per tick while a move is in flight.
    pub step_degrees: f32,
    pub quarter_turn_degrees: f32,
    /// Distance between neighbouring cubelet centres.
    pub layer_spacing: f32,
    pub queue_capacity: usize,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            step_degrees: 1.0,
            quarter_turn_degrees: 90.0,
            layer_spacing: 2.2,
            queue_capacity: 16,
        }
    }
}

impl CompositorConfig {
    pub fn steps_per_turn(&self) -> u32 {
        (self.quarter_turn_degrees / self.step_degrees).round() as u32
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.step_degrees.is_finite() && self.step_degrees > 0.0) {
            return Err(Error::InvalidConfig("step_degrees must be positive"));
        }
        if !(self.quarter_turn_degrees.is_finite() && self.quarter_turn_degrees > 0.0) {
            return Err(Error::InvalidConfig("quarter_turn_degrees must be positive"));
        }
        let steps = self.quarter_turn_degrees / self.step_degrees;
        if steps < 1.0 || (steps - steps.round()).abs() > 1e-3 {
            return Err(Error::InvalidConfig(
                "step_degrees must divide the quarter turn into whole steps",
            ));
        }
        if !(self.layer_spacing.is_finite() && self.layer_spacing > 0.0) {
            return Err(Error::InvalidConfig("layer_spacing must be positive"));
        }
        if self.queue_capacity == 0 {
            return Err(Error::InvalidConfig("queue_capacity must be non-zero"));
        }
        Ok(())
    }
}
