//! Enumeration of free polyominoes.
//!
//! A polyomino is a shape formed by edge-connected unit cells on a
//! square grid; a *free* polyomino is considered identical to any of
//! its rotations and reflections. This crate provides the validated
//! [`Polyomino`] value type, the [`D4Subgroup`] symmetry classification
//! attached to every shape, and [`free_polyominoes`], a lazy generator
//! that grows each order from the previous one while deduplicating
//! across all 8 orientations of the square's symmetry group.


pub mod generator;
pub mod grid_vec;
pub mod polyomino;
pub mod symmetry;
pub mod text;

pub use generator::{free_polyominoes, FreePolyominoes};
pub use grid_vec::GridVec;
pub use polyomino::{InvalidShape, Polyomino};
pub use symmetry::D4Subgroup;
