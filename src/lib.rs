#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Spiral sampling around an arbitrary 3D centerline curve.
//!
//! The crate answers one question: given a centerline curve and a set of
//! winding parameters, where is the spiral surface at a given distance (or
//! winding angle) along that curve? The centerline does not have to be
//! straight or planar; it is abstracted behind the [`geom::Centerline`]
//! trait, which only reports its arc length and an oriented frame at a
//! given arc-length distance.
//!
//! All queries are synchronous, stateless per call, and reentrant as long
//! as the attached collaborators are read-only.

pub mod geom;
