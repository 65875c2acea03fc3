//! Animated entity types: lanterns, ambient particles, parallax clouds
//!
//! Each entity pairs an immutable anchor and parameter set, fixed at
//! creation, with a pure per-frame animator mapping elapsed time to a fresh
//! transform. Nothing here mutates between frames except particle positions,
//! which integrate a fixed velocity.

pub mod cloud;
pub mod lantern;
pub mod particle;
