// extensions/mod.rs
//
// Optional helpers decoupled from the entity types.

pub mod easing;

pub use easing::{ease, lerp, Easing};
