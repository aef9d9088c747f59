use std::ops::Index;

use glam::IVec2;

use crate::error::Error;
use crate::labels::{Direction, RingPermutation};
use crate::slot::{Cubelet, Face, Layer, POSITIONS_PER_LAYER, Position, SLOT_COUNT, Slot};

/// Which cubelet currently occupies each of the 27 slots.
///
/// Starts as the identity mapping and is only ever changed by
/// [`relabel_face`], so it stays a bijection for its whole life.
///
/// [`relabel_face`]: FaceLabelTable::relabel_face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLabelTable {
    occupants: [Cubelet; SLOT_COUNT],
}

impl Default for FaceLabelTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceLabelTable {
    pub fn new() -> Self {
        Self {
            occupants: Slot::ALL.map(Cubelet::home),
        }
    }

    pub fn occupant(&self, slot: Slot) -> Cubelet {
        self.occupants[slot.index()]
    }

    /// Slot currently holding `cubelet`.
    pub fn locate(&self, cubelet: Cubelet) -> Slot {
        Slot::ALL
            .into_iter()
            .find(|slot| self.occupant(*slot) == cubelet)
            .unwrap_or_else(|| cubelet.home_slot())
    }

    pub fn layer(&self, layer: Layer) -> [Cubelet; POSITIONS_PER_LAYER] {
        Position::ALL.map(|position| self.occupant(Slot::new(layer, position)))
    }

    /// Occupants of `layer` as seen from the front, top row first.
    pub fn grid(&self, layer: Layer) -> [[Cubelet; 3]; 3] {
        [1, 0, -1].map(|y| {
            [-1, 0, 1].map(|x| {
                let position = Position::from_offset(IVec2::new(x, y)).unwrap_or(Position::Center);
                self.occupant(Slot::new(layer, position))
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, Cubelet)> + '_ {
        Slot::ALL.into_iter().zip(self.occupants.iter().copied())
    }

    pub fn is_identity(&self) -> bool {
        self.iter().all(|(slot, cubelet)| cubelet.home_slot() == slot)
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; SLOT_COUNT];
        for cubelet in &self.occupants {
            if std::mem::replace(&mut seen[cubelet.index()], true) {
                return false;
            }
        }
        true
    }

    /// Applies a completed quarter turn of `layer` to the ring slots of that
    /// layer. The centre slot and the other layers are left alone.
    pub fn relabel(&mut self, layer: Layer, direction: Direction) -> Result<(), Error> {
        self.relabel_face(layer.into(), direction)
    }

    /// Applies a completed quarter turn of any face with a table entry.
    /// Nothing changes when the lookup fails.
    pub fn relabel_face(&mut self, face: Face, direction: Direction) -> Result<(), Error> {
        let permutation = RingPermutation::lookup(face, direction)?;
        let previous = self.occupants;

        for (target, source) in permutation.pairs {
            self.occupants[target.index()] = previous[source.index()];
        }

        log::debug!(
            "relabel {} {:?}: {}",
            face.as_str(),
            direction,
            permutation
                .pairs
                .iter()
                .map(|(target, _)| format!("{}={}", target, self.occupant(*target)))
                .collect::<Vec<_>>()
                .join(" ")
        );

        Ok(())
    }
}

impl Index<Slot> for FaceLabelTable {
    type Output = Cubelet;

    fn index(&self, slot: Slot) -> &Self::Output {
        &self.occupants[slot.index()]
    }
}
