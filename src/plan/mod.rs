//! The planning pipeline: line extraction, merge planning, alignment, and
//! whole-board move compilation.
//!
//! Planning is pure. It borrows the board read-only, produces a
//! [`MovePlan`], and leaves every mutation to the caller-driven apply and
//! commit phases.

pub mod align;
pub mod compiler;
pub mod line;
pub mod merge;

pub use align::{align_line, MoveBuf, TileMove};
pub use compiler::{has_any_legal_move, plan_move, MovePlan};
pub use line::{extract_line, LineBuf};
pub use merge::{plan_merges, IntentBuf, MergeIntent};
