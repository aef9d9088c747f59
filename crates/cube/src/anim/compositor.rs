use glam::Mat4;

use super::{CompositorConfig, Move, MoveQueue, MoveSpec};
use crate::error::Error;
use crate::labels::{Direction, FaceLabelTable, RingPermutation};
use crate::slot::{Cubelet, Face, SLOT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Rotating,
}

/// Reported by [`Compositor::advance`] on the tick a move finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCompleted {
    pub mv: Move,
    pub face: Face,
    pub direction: Direction,
    pub tick: u64,
}

#[derive(Debug, Clone)]
struct ActiveMove {
    mv: Move,
    spec: MoveSpec,
    step: Mat4,
    cubelets: Vec<Cubelet>,
    counter: u32,
}

/// Accumulates per-cubelet transforms one tick at a time and relabels the
/// face-label table when a quarter turn has been fully applied.
#[derive(Debug, Clone)]
pub struct Compositor {
    config: CompositorConfig,
    steps_per_turn: u32,
    labels: FaceLabelTable,
    transforms: [Mat4; SLOT_COUNT],
    active: Option<ActiveMove>,
    queue: MoveQueue,
    tick: u64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::from_valid(CompositorConfig::default())
    }
}

impl Compositor {
    pub fn new(config: CompositorConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: CompositorConfig) -> Self {
        Self {
            steps_per_turn: config.steps_per_turn(),
            labels: FaceLabelTable::new(),
            transforms: [Mat4::IDENTITY; SLOT_COUNT],
            active: None,
            queue: MoveQueue::new(config.queue_capacity),
            tick: 0,
            config,
        }
    }

    pub fn steps_per_turn(&self) -> u32 {
        self.steps_per_turn
    }

    pub fn labels(&self) -> &FaceLabelTable {
        &self.labels
    }

    pub fn transform(&self, cubelet: Cubelet) -> Mat4 {
        self.transforms[cubelet.index()]
    }

    /// Indexed by [`Cubelet::index`].
    pub fn transforms(&self) -> &[Mat4; SLOT_COUNT] {
        &self.transforms
    }

    pub fn slot_state(&self, cubelet: Cubelet) -> SlotState {
        match &self.active {
            Some(active) if active.cubelets.contains(&cubelet) => SlotState::Rotating,
            _ => SlotState::Idle,
        }
    }

    /// Ticks applied by the in-flight move, 0 when idle.
    pub fn counter(&self) -> u32 {
        self.active.as_ref().map_or(0, |a| a.counter)
    }

    pub fn active(&self) -> Option<Move> {
        self.active.as_ref().map(|a| a.mv)
    }

    pub fn pending(&self) -> impl Iterator<Item = Move> + '_ {
        self.queue.iter()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Starts `mv` right away when nothing is turning, otherwise queues it.
    pub fn dispatch(&mut self, mv: Move) -> Result<(), Error> {
        let spec = mv.spec(&self.config);
        RingPermutation::lookup(spec.face, spec.direction)?;

        if self.active.is_none() {
            self.activate(mv, spec);
        } else if let Some(dropped) = self.queue.push(mv) {
            log::warn!("move queue full, dropped {}", dropped.as_str());
        }

        Ok(())
    }

    fn activate(&mut self, mv: Move, spec: MoveSpec) {
        let cubelets: Vec<Cubelet> = spec
            .slots
            .iter()
            .map(|slot| self.labels.occupant(*slot))
            .collect();

        log::debug!(
            "tick {}: {} started on {} cubelets",
            self.tick,
            mv.as_str(),
            cubelets.len()
        );

        self.active = Some(ActiveMove {
            mv,
            step: spec.step_transform(),
            spec,
            cubelets,
            counter: 0,
        });
    }

    /// Applies one tick of rotation to the in-flight move.
    pub fn advance(&mut self) -> Result<Option<TurnCompleted>, Error> {
        self.tick += 1;

        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };

        for cubelet in &active.cubelets {
            let transform = &mut self.transforms[cubelet.index()];
            *transform = active.step * *transform;
        }
        active.counter += 1;

        if active.counter < self.steps_per_turn {
            return Ok(None);
        }

        let Some(finished) = self.active.take() else {
            return Ok(None);
        };
        self.labels
            .relabel_face(finished.spec.face, finished.spec.direction)?;

        log::info!("tick {}: {} completed", self.tick, finished.mv.as_str());

        if let Some(next) = self.queue.pop() {
            let spec = next.spec(&self.config);
            self.activate(next, spec);
        }

        Ok(Some(TurnCompleted {
            mv: finished.mv,
            face: finished.spec.face,
            direction: finished.spec.direction,
            tick: self.tick,
        }))
    }

    pub fn advance_by(&mut self, ticks: u32) -> Result<Vec<TurnCompleted>, Error> {
        let mut completed = Vec::new();
        for _ in 0..ticks {
            if let Some(turn) = self.advance()? {
                completed.push(turn);
            }
        }
        Ok(completed)
    }
}
