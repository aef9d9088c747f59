use crate::anim::{Compositor, TurnCompleted};
use crate::error::Error;

/// Longest frame folded into the backlog. The rest of a longer frame is
/// dropped.
const MAX_FRAME_SECS: f32 = 0.25;

/// Converts wall-clock deltas into whole ticks of `period` seconds.
pub(crate) struct FixedTimestep {
    period: f32,
    backlog: f32,
}

impl FixedTimestep {
    pub(crate) fn new(tick_rate: u32) -> Self {
        Self {
            period: 1.0 / tick_rate.max(1) as f32,
            backlog: 0.0,
        }
    }

    pub(crate) fn accumulate(&mut self, delta: f32) {
        self.backlog += delta.min(MAX_FRAME_SECS);
    }

    /// Takes one tick off the backlog if a whole one is available.
    pub(crate) fn consume_tick(&mut self) -> bool {
        if self.backlog < self.period {
            return false;
        }
        self.backlog -= self.period;
        true
    }
}

/// Drives a [`Compositor`] at a fixed tick rate from wall-clock deltas.
///
/// `tick_fn` runs before every tick and is where a host dispatches moves.
pub struct SimulationLoop<F> {
    compositor: Compositor,
    timestep: FixedTimestep,
    tick_fn: F,
}

impl<F> SimulationLoop<F>
where
    F: FnMut(&mut Compositor),
{
    pub fn new(tick_rate: u32, compositor: Compositor, tick_fn: F) -> Self {
        Self {
            compositor,
            timestep: FixedTimestep::new(tick_rate),
            tick_fn,
        }
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.compositor
    }

    /// Runs every whole tick that fits in the accumulated time and returns
    /// the turns that finished.
    pub fn update(&mut self, delta: f32) -> Result<Vec<TurnCompleted>, Error> {
        self.timestep.accumulate(delta);

        let mut completed = Vec::new();
        while self.timestep.consume_tick() {
            (self.tick_fn)(&mut self.compositor);
            if let Some(turn) = self.compositor.advance()? {
                completed.push(turn);
            }
        }

        Ok(completed)
    }

    /// Runs exactly one tick regardless of accumulated time.
    pub fn step(&mut self) -> Result<Option<TurnCompleted>, Error> {
        (self.tick_fn)(&mut self.compositor);
        self.compositor.advance()
    }
}
