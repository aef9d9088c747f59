use std::fmt;

use glam::{IVec2, Vec3};

pub const POSITIONS_PER_LAYER: usize = 9;
pub const SLOT_COUNT: usize = POSITIONS_PER_LAYER * 3;

/// One of the three depth slices, front first. Depth grows along -Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Front,
    Middle,
    Back,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Front, Layer::Middle, Layer::Back];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn depth(self, spacing: f32) -> f32 {
        -(self.index() as f32) * spacing
    }

    pub fn center(self, spacing: f32) -> Vec3 {
        Vec3::new(0.0, 0.0, self.depth(spacing))
    }

    pub fn slots(self) -> impl Iterator<Item = Slot> {
        Position::ALL.into_iter().map(move |position| Slot::new(self, position))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Front => "front",
            Layer::Middle => "middle",
            Layer::Back => "back",
        }
    }
}

/// Nine slots that turn together as one quarter turn: a depth layer, or the
/// column of right-hand slots running through all three layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Middle,
    Back,
    Right,
}

impl Face {
    /// Turn axis. Layers turn about +Z, the right column about +X.
    pub fn axis(self) -> Vec3 {
        match self {
            Face::Front | Face::Middle | Face::Back => Vec3::Z,
            Face::Right => Vec3::X,
        }
    }

    /// Point the turn axis passes through.
    pub fn pivot(self, spacing: f32) -> Vec3 {
        match self {
            Face::Front => Layer::Front.center(spacing),
            Face::Middle | Face::Right => Layer::Middle.center(spacing),
            Face::Back => Layer::Back.center(spacing),
        }
    }

    pub fn slots(self) -> [Slot; POSITIONS_PER_LAYER] {
        match self {
            Face::Front => Position::ALL.map(|p| Slot::new(Layer::Front, p)),
            Face::Middle => Position::ALL.map(|p| Slot::new(Layer::Middle, p)),
            Face::Back => Position::ALL.map(|p| Slot::new(Layer::Back, p)),
            Face::Right => {
                let column = [Position::TopRight, Position::Right, Position::BottomRight];
                std::array::from_fn(|i| Slot::new(Layer::ALL[i / 3], column[i % 3]))
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Middle => "middle",
            Face::Back => "back",
            Face::Right => "right",
        }
    }
}

impl From<Layer> for Face {
    fn from(layer: Layer) -> Self {
        match layer {
            Layer::Front => Face::Front,
            Layer::Middle => Face::Middle,
            Layer::Back => Face::Back,
        }
    }
}

/// Position of a slot within its layer. Discriminants follow the flat slot
/// ordering, so `Center` is offset 0 of each layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Center,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; POSITIONS_PER_LAYER] = [
        Position::Center,
        Position::Left,
        Position::Right,
        Position::Top,
        Position::Bottom,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    pub const RING: [Position; 8] = [
        Position::Left,
        Position::Right,
        Position::Top,
        Position::Bottom,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_ring(self) -> bool {
        self != Position::Center
    }

    /// Grid offset with +x to the right and +y up.
    pub fn offset(self) -> IVec2 {
        match self {
            Position::Center => IVec2::new(0, 0),
            Position::Left => IVec2::new(-1, 0),
            Position::Right => IVec2::new(1, 0),
            Position::Top => IVec2::new(0, 1),
            Position::Bottom => IVec2::new(0, -1),
            Position::TopLeft => IVec2::new(-1, 1),
            Position::TopRight => IVec2::new(1, 1),
            Position::BottomLeft => IVec2::new(-1, -1),
            Position::BottomRight => IVec2::new(1, -1),
        }
    }

    pub fn from_offset(offset: IVec2) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.offset() == offset)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Center => "center",
            Position::Left => "left",
            Position::Right => "right",
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }
}

/// A logical position in the 3x3x3 arrangement, independent of which cubelet
/// currently occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub layer: Layer,
    pub position: Position,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = {
        let mut slots = [Slot::new(Layer::Front, Position::Center); SLOT_COUNT];
        let mut i = 0;
        while i < SLOT_COUNT {
            let layer = match i / POSITIONS_PER_LAYER {
                0 => Layer::Front,
                1 => Layer::Middle,
                _ => Layer::Back,
            };
            slots[i] = Slot::new(layer, Position::ALL[i % POSITIONS_PER_LAYER]);
            i += 1;
        }
        slots
    };

    pub const fn new(layer: Layer, position: Position) -> Self {
        Self { layer, position }
    }

    pub fn index(self) -> usize {
        self.layer.index() * POSITIONS_PER_LAYER + self.position.index()
    }

    /// Centre of the slot in model space for the given cube spacing.
    pub fn center(self, spacing: f32) -> Vec3 {
        let offset = self.position.offset().as_vec2() * spacing;
        Vec3::new(offset.x, offset.y, self.layer.depth(spacing))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.layer.as_str(), self.position.as_str())
    }
}

/// A physical sub-cube, named by the slot it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cubelet(Slot);

impl Cubelet {
    pub fn home(home: Slot) -> Self {
        Self(home)
    }

    pub fn home_slot(self) -> Slot {
        self.0
    }

    pub fn index(self) -> usize {
        self.0.index()
    }

    pub fn all() -> impl Iterator<Item = Cubelet> {
        Slot::ALL.into_iter().map(Self)
    }
}

impl fmt::Display for Cubelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slot_indices_are_dense_and_unique() {
        let indices: HashSet<usize> = Slot::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices.len(), SLOT_COUNT);
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn layer_offsets_match_flat_layout() {
        assert_eq!(Slot::new(Layer::Middle, Position::Center).index(), 9);
        assert_eq!(Slot::new(Layer::Back, Position::Center).index(), 18);
        assert_eq!(Slot::new(Layer::Back, Position::BottomRight).index(), 26);
    }

    #[test]
    fn offsets_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::from_offset(position.offset()), Some(position));
        }
        assert!(!Position::Center.is_ring());
        assert!(Position::RING.iter().all(|p| p.is_ring()));
    }

    #[test]
    fn face_slots_match_their_members() {
        let front: Vec<Slot> = Layer::Front.slots().collect();
        assert_eq!(Face::Front.slots().to_vec(), front);

        let right = Face::Right.slots();
        assert_eq!(right.iter().collect::<HashSet<_>>().len(), 9);
        for slot in right {
            assert_eq!(slot.position.offset().x, 1, "{slot}");
        }
        assert_eq!(Face::Right.pivot(2.2), Vec3::new(0.0, 0.0, -2.2));
        assert_eq!(Face::from(Layer::Back).pivot(2.2), Vec3::new(0.0, 0.0, -4.4));
    }

    #[test]
    fn slot_centers_follow_spacing() {
        let slot = Slot::new(Layer::Back, Position::TopRight);
        assert_eq!(slot.center(2.0), Vec3::new(2.0, 2.0, -4.0));
        assert_eq!(Layer::Middle.center(2.2), Vec3::new(0.0, 0.0, -2.2));
    }
}
