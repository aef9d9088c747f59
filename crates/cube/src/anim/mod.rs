mod compositor;
mod config;
mod moves;
mod queue;

pub use compositor::{Compositor, SlotState, TurnCompleted};
pub use config::CompositorConfig;
pub use moves::{Move, MoveSpec};
pub use queue::MoveQueue;
