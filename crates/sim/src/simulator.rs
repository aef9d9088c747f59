use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use rubiks::{Compositor, Cubelet, FaceLabelTable, Move, SLOT_COUNT, SimulationLoop, SlotState};

use crate::config::SimConfig;
use crate::events::SimEvent;

type TickHook = fn(&mut Compositor);

fn trace_tick(compositor: &mut Compositor) {
    if let Some(mv) = compositor.active() {
        log::trace!(
            "tick {}: {} {}/{}",
            compositor.tick(),
            mv.as_str(),
            compositor.counter(),
            compositor.steps_per_turn()
        );
    }
}

#[derive(Debug, Clone)]
pub struct SimStats {
    pub tick: u64,
    pub counter: u32,
    pub steps_per_turn: u32,
    pub active: Option<Move>,
    pub pending: Vec<Move>,
    pub labels: FaceLabelTable,
    pub rotating: [bool; SLOT_COUNT],
    pub completed_turns: u32,
    pub paused: bool,
    pub uptime_secs: u64,
}

pub struct Simulator {
    sim: SimulationLoop<TickHook>,
    config: SimConfig,
    last_tick_time: Instant,
    start_time: Instant,
    running: Arc<AtomicBool>,
    paused: bool,
    finished: bool,
    completed_turns: u32,
    pending_events: VecDeque<SimEvent>,
}

impl Simulator {
    pub fn new(config: SimConfig, script: &[Move]) -> Result<Self, rubiks::Error> {
        let compositor = Compositor::new(config.compositor.clone())?;

        let mut simulator = Self {
            sim: SimulationLoop::new(config.tick_rate, compositor, trace_tick as TickHook),
            config,
            last_tick_time: Instant::now(),
            start_time: Instant::now(),
            running: Arc::new(AtomicBool::new(true)),
            paused: false,
            finished: false,
            completed_turns: 0,
            pending_events: VecDeque::new(),
        };

        for mv in script {
            simulator.dispatch(*mv)?;
        }

        Ok(simulator)
    }

    pub fn running(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = SimEvent> + '_ {
        self.pending_events.drain(..)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn labels(&self) -> &FaceLabelTable {
        self.sim.compositor().labels()
    }

    pub fn dispatch(&mut self, mv: Move) -> Result<(), rubiks::Error> {
        self.sim.compositor_mut().dispatch(mv)?;
        self.finished = false;
        self.pending_events.push_back(SimEvent::MoveQueued { mv });
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.pending_events.push_back(SimEvent::Paused {
            paused: self.paused,
        });
    }

    pub fn tick_once(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_tick_time;
        self.last_tick_time = now;

        self.update(delta.as_secs_f32());
    }

    /// Advances the simulation by `delta` seconds of host time.
    pub fn update(&mut self, delta: f32) {
        if self.paused || self.finished {
            return;
        }

        match self.sim.update(delta) {
            Ok(turns) => {
                for turn in turns {
                    self.completed_turns += 1;
                    self.pending_events
                        .push_back(SimEvent::TurnCompleted { turn });
                }
            }
            Err(err) => {
                self.pending_events.push_back(SimEvent::Error {
                    message: err.to_string(),
                });
            }
        }

        let compositor = self.sim.compositor();
        let out_of_ticks = self.config.max_ticks > 0 && compositor.tick() >= self.config.max_ticks;
        if compositor.is_idle() || out_of_ticks {
            self.finished = true;
            self.pending_events.push_back(SimEvent::Finished {
                tick: compositor.tick(),
            });
        }
    }

    pub fn stats(&self) -> SimStats {
        let compositor = self.sim.compositor();
        let mut rotating = [false; SLOT_COUNT];
        for cubelet in Cubelet::all() {
            rotating[cubelet.index()] = compositor.slot_state(cubelet) == SlotState::Rotating;
        }

        SimStats {
            tick: compositor.tick(),
            counter: compositor.counter(),
            steps_per_turn: compositor.steps_per_turn(),
            active: compositor.active(),
            pending: compositor.pending().collect(),
            labels: compositor.labels().clone(),
            rotating,
            completed_turns: self.completed_turns,
            paused: self.paused,
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }
}
