//! Generation, transfer and conversion of **vertex** and **split (per-corner) normals**
//! for polygon meshes.
//!
//! Every operation reads a value-typed snapshot of a host mesh ([`NormalHost`]), computes
//! a complete [`NormalArray`] from it and writes the result back exactly once. A failed
//! operation never leaves a partially edited mesh behind.
//!
//! ```text
//! host ──▶ MeshTopology + NormalView ──▶ generator / transfer / manual ──▶ NormalArray ──▶ commit
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: use hashbrown for edge counting and adjacency deduplication
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **serde**: serialize parameters, modes and generator choices

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod vector;
pub mod traits;
pub mod params;
pub mod mesh;
pub mod topology;
pub mod view;
pub mod generators;
pub mod convert;
pub mod transfer;
pub mod manual;
pub mod commit;
pub mod editor;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use editor::Outcome;
pub use errors::NormalsError;
pub use generators::{Generator, NormalGenerator};
pub use mesh::EditMesh;
pub use params::{BoundaryMode, GenerateParams, ManualParams, TransferParams};
pub use topology::MeshTopology;
pub use traits::{NormalHost, NormalMode};
pub use view::{NormalArray, NormalView};
