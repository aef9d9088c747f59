use glam::{Mat4, Vec3};

use super::CompositorConfig;
use crate::error::Error;
use crate::labels::Direction;
use crate::slot::{Face, Slot};

/// A scripted quarter turn. Indices match the host's move script, so `1` is
/// the front layer and `2` the right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    FrontClockwise,
    RightColumn,
}

/// Everything the compositor needs to animate one move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSpec {
    pub face: Face,
    pub direction: Direction,
    /// Slots whose occupants turn, resolved when the move becomes active.
    pub slots: Vec<Slot>,
    pub axis: Vec3,
    /// Signed rotation per tick.
    pub step_radians: f32,
    pub pivot: Vec3,
}

impl Move {
    pub const ALL: [Move; 2] = [Move::FrontClockwise, Move::RightColumn];

    pub fn from_index(index: u32) -> Result<Self, Error> {
        match index {
            1 => Ok(Move::FrontClockwise),
            2 => Ok(Move::RightColumn),
            other => Err(Error::UnknownMove(other)),
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Move::FrontClockwise => 1,
            Move::RightColumn => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::FrontClockwise => "front clockwise",
            Move::RightColumn => "right column",
        }
    }

    /// Face and direction of the turn, which is also the relabel key.
    pub fn turn(self) -> (Face, Direction) {
        match self {
            Move::FrontClockwise => (Face::Front, Direction::Clockwise),
            // Top of the column tips away from the viewer.
            Move::RightColumn => (Face::Right, Direction::CounterClockwise),
        }
    }

    pub fn spec(self, config: &CompositorConfig) -> MoveSpec {
        let (face, direction) = self.turn();

        MoveSpec {
            face,
            direction,
            slots: face.slots().to_vec(),
            axis: face.axis(),
            step_radians: config.step_degrees.to_radians() * direction.sign(),
            pivot: face.pivot(config.layer_spacing),
        }
    }
}

impl MoveSpec {
    /// World-space increment applied once per tick: rotate about `axis`
    /// through `pivot`.
    pub fn step_transform(&self) -> Mat4 {
        Mat4::from_translation(self.pivot)
            * Mat4::from_axis_angle(self.axis, self.step_radians)
            * Mat4::from_translation(-self.pivot)
    }
}
