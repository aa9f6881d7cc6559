//! Real-time particle-based cloth solver.
//!
//! Implements classical Position-Based Dynamics (PBD) and Extended
//! Position-Based Dynamics (XPBD) over a rectangular cloth grid: Verlet
//! particles, a distance-constraint graph (structural/shear/bend), sphere
//! collider push-out, and a material-compliance table spanning near-rigid
//! concrete to soft fat.
//!
//! The crate is simulation only. Windowing, input, cameras and rendering
//! live with the external driver; it calls [`Cloth::step`] once per frame
//! and reads particle positions afterwards.

pub mod cloth;
pub mod collider;
pub mod config;
pub mod constraint;
pub mod context;
pub mod error;
pub mod material;
pub mod particle;

pub use cloth::Cloth;
pub use collider::{SphereCollider, SURFACE_MARGIN};
pub use config::ClothConfig;
pub use constraint::{ConstraintKind, DistanceConstraint};
pub use context::SimulationContext;
pub use error::{ClothError, ClothResult};
pub use material::{MaterialProfile, SolveMode};
pub use particle::Particle;
