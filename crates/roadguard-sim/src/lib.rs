//! The ROADGUARD simulation: enemies travel a straight road, towers
//! auto-target and shoot them, leaked enemies cost the player health.
//!
//! Completely headless: the world is driven by a caller-supplied
//! millisecond clock sampled once per frame, renders through the
//! `DrawSurface` trait, and is deterministic given a seed and a clock.

pub mod enemy;
pub mod projectile;
pub mod tower;
pub mod world;

#[cfg(test)]
mod tests;
