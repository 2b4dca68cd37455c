//! Navigation over flattened maps.
//!
//! [`JumpTable`] is the positional index (absolute numbering, holes for
//! filtered-out items); [`Navigator`] carries the current position and
//! implements the movement rules.

mod jumps;
mod navigator;

pub use jumps::*;
pub use navigator::*;
