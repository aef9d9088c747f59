use crate::error::Error;
use crate::slot::{Face, Layer, Position, Slot};

/// Turn direction of a face. `Clockwise` is a positive (right-handed) angle
/// about the face's axis, +Z for layers and +X for the right column. The
/// viewer sits on +Z looking down -Z, so a `Clockwise` front turn appears
/// counter-clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }
}

/// Eight `(target, source)` assignments: after a quarter turn the target slot
/// holds the cubelet previously in the source slot. The ninth slot of the
/// face lies on the axis and keeps its occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingPermutation {
    pub face: Face,
    pub direction: Direction,
    pub pairs: [(Slot, Slot); 8],
}

const fn front(position: Position) -> Slot {
    Slot::new(Layer::Front, position)
}

const FRONT_CLOCKWISE: RingPermutation = RingPermutation {
    face: Face::Front,
    direction: Direction::Clockwise,
    pairs: [
        (front(Position::Top), front(Position::Right)),
        (front(Position::Right), front(Position::Bottom)),
        (front(Position::Bottom), front(Position::Left)),
        (front(Position::Left), front(Position::Top)),
        (front(Position::TopRight), front(Position::BottomRight)),
        (front(Position::TopLeft), front(Position::TopRight)),
        (front(Position::BottomRight), front(Position::BottomLeft)),
        (front(Position::BottomLeft), front(Position::TopLeft)),
    ],
};

// Top of the column tips backwards: front -> top -> back -> bottom -> front.
const RIGHT_COUNTER_CLOCKWISE: RingPermutation = RingPermutation {
    face: Face::Right,
    direction: Direction::CounterClockwise,
    pairs: [
        (
            Slot::new(Layer::Middle, Position::TopRight),
            front(Position::Right),
        ),
        (
            Slot::new(Layer::Back, Position::Right),
            Slot::new(Layer::Middle, Position::TopRight),
        ),
        (
            Slot::new(Layer::Middle, Position::BottomRight),
            Slot::new(Layer::Back, Position::Right),
        ),
        (
            front(Position::Right),
            Slot::new(Layer::Middle, Position::BottomRight),
        ),
        (
            Slot::new(Layer::Back, Position::TopRight),
            front(Position::TopRight),
        ),
        (
            Slot::new(Layer::Back, Position::BottomRight),
            Slot::new(Layer::Back, Position::TopRight),
        ),
        (
            front(Position::BottomRight),
            Slot::new(Layer::Back, Position::BottomRight),
        ),
        (front(Position::TopRight), front(Position::BottomRight)),
    ],
};

static PERMUTATIONS: &[RingPermutation] = &[FRONT_CLOCKWISE, RIGHT_COUNTER_CLOCKWISE];

impl RingPermutation {
    pub fn lookup(face: Face, direction: Direction) -> Result<&'static RingPermutation, Error> {
        PERMUTATIONS
            .iter()
            .find(|p| p.face == face && p.direction == direction)
            .ok_or(Error::UnsupportedRelabel { face, direction })
    }

    pub fn is_supported(face: Face, direction: Direction) -> bool {
        Self::lookup(face, direction).is_ok()
    }

    pub fn all() -> &'static [RingPermutation] {
        PERMUTATIONS
    }

    /// Where the cubelet currently in `source` ends up.
    pub fn target_of(&self, source: Slot) -> Slot {
        self.pairs
            .iter()
            .find(|(_, s)| *s == source)
            .map(|(t, _)| *t)
            .unwrap_or(source)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::f32::consts::FRAC_PI_2;

    use glam::Mat4;

    use super::*;

    const SPACING: f32 = 2.2;

    #[test]
    fn every_table_entry_is_a_ring_bijection() {
        for perm in RingPermutation::all() {
            let targets: HashSet<Slot> = perm.pairs.iter().map(|(t, _)| *t).collect();
            let sources: HashSet<Slot> = perm.pairs.iter().map(|(_, s)| *s).collect();
            let face: HashSet<Slot> = perm.face.slots().into_iter().collect();

            assert_eq!(targets.len(), 8);
            assert_eq!(targets, sources);
            assert!(targets.is_subset(&face), "{:?}", perm.face);
        }
    }

    #[test]
    fn entries_follow_quarter_turn_geometry() {
        for perm in RingPermutation::all() {
            let pivot = perm.face.pivot(SPACING);
            let turn = Mat4::from_translation(pivot)
                * Mat4::from_axis_angle(perm.face.axis(), perm.direction.sign() * FRAC_PI_2)
                * Mat4::from_translation(-pivot);

            for slot in perm.face.slots() {
                let moved = turn.transform_point3(slot.center(SPACING));
                let target = perm.target_of(slot);
                assert!(
                    moved.abs_diff_eq(target.center(SPACING), 1e-4),
                    "{:?}: {slot} -> {target} but lands at {moved}",
                    perm.face
                );
            }
        }
    }

    #[test]
    fn only_shipped_entries_are_defined() {
        assert!(RingPermutation::is_supported(Face::Front, Direction::Clockwise));
        assert!(RingPermutation::is_supported(
            Face::Right,
            Direction::CounterClockwise
        ));
        assert_eq!(
            RingPermutation::lookup(Face::Back, Direction::Clockwise),
            Err(Error::UnsupportedRelabel {
                face: Face::Back,
                direction: Direction::Clockwise,
            })
        );
        assert!(!RingPermutation::is_supported(
            Face::Front,
            Direction::CounterClockwise
        ));
    }

    #[test]
    fn axis_slots_stay_put() {
        let perm = RingPermutation::lookup(Face::Front, Direction::Clockwise).unwrap();
        assert_eq!(perm.target_of(front(Position::Center)), front(Position::Center));
        assert_eq!(perm.target_of(front(Position::Right)), front(Position::Top));

        let perm = RingPermutation::lookup(Face::Right, Direction::CounterClockwise).unwrap();
        let axis = Slot::new(Layer::Middle, Position::Right);
        assert_eq!(perm.target_of(axis), axis);
    }
}
