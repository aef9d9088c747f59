mod permutation;
mod table;

pub use permutation::{Direction, RingPermutation};
pub use table::FaceLabelTable;
