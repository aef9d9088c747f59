pub mod anim;
pub mod error;
pub mod labels;
pub mod simulation;
pub mod slot;

pub use anim::{Compositor, CompositorConfig, Move, MoveQueue, MoveSpec, SlotState, TurnCompleted};
pub use error::Error;
pub use labels::{Direction, FaceLabelTable, RingPermutation};
pub use simulation::SimulationLoop;
pub use slot::{Cubelet, Face, Layer, Position, Slot, SLOT_COUNT};
