use crate::labels::Direction;
use crate::slot::Face;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no relabel defined for {direction:?} turn of the {face:?} face")]
    UnsupportedRelabel { face: Face, direction: Direction },
    #[error("unknown move index {0}")]
    UnknownMove(u32),
    #[error("invalid compositor config: {0}")]
    InvalidConfig(&'static str),
}
