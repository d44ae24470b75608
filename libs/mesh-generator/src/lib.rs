//! # Mesh Generator
//!
//! Model behind an interactive scaffold mesh generator step. It holds the
//! scaffold package being edited, its transformation and display settings,
//! and drives a [`MeshHost`] to regenerate and draw the mesh.
//!
//! ## Architecture
//!
//! ```text
//! GUI ──► MeshGeneratorModel ──► MeshHost (finite element mesh + scene)
//!              │      │
//!              │      └──► GraphicsPlan (what to draw)
//!              └──► ScaffoldRegistry (scaffold types and parameter sets)
//! ```
//!
//! ## Modules
//!
//! - [`model`]: the stateful model and every GUI operation
//! - [`scaffold`]: scaffold packages, option values, scaffold type registry
//! - [`settings`]: persisted settings JSON with legacy migration
//! - [`graphics`]: graphics planning and sizing from mesh metrics
//! - [`transform`]: rotation, scale and translation matrices
//! - [`vector`]: tolerant vector text parsing and formatting
//! - [`host`]: the engine interface the model drives

pub mod error;
pub mod graphics;
pub mod host;
pub mod model;
pub mod scaffold;
pub mod settings;
pub mod transform;
pub mod vector;

pub use error::GeneratorError;
pub use graphics::{GraphicsPlan, GraphicsSpec, NodeParameterQuery};
pub use host::{HostError, MeshHost, MeshMetrics};
pub use model::MeshGeneratorModel;
pub use scaffold::{OptionValue, ScaffoldPackage, ScaffoldRegistry, ScaffoldSettings, ScaffoldType};
pub use settings::{DisplaySettings, GeneratorSettings};
pub use transform::Transformation;
