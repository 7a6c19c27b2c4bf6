//! Effect recipes
//!
//! Each recipe is an independent pure function over its own constant table
//! and returns one un-normalized mono buffer at 44.1kHz. Recipes share the
//! primitives in [`crate::dsp`] and nothing else.

pub mod card_slide_vacuum;
pub mod chips_stack_stick;
pub mod chips_vacuum;
pub mod hand_knock_check;

pub use card_slide_vacuum::card_slide_vacuum;
pub use chips_stack_stick::chips_stack_stick;
pub use chips_vacuum::chips_vacuum;
pub use hand_knock_check::hand_knock_check;
