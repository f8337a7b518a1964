//! Platform abstraction layer
//!
//! The windowing backend delivers discrete key and pointer events; this layer
//! turns them into the held-key lookups and hit tests the simulation reads.

pub mod input;

pub use input::{HeldKeys, InputEvent, Key, Rect};
