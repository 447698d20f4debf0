//! Document model, factory defaults, and the pure tree-edit engine.

pub mod edit;
pub mod factory;
pub mod id;
pub mod model;
pub mod normalize;

pub use edit::{Direction, NodePatch, WrapperKind};
pub use id::NodeId;
pub use model::*;
pub use normalize::{document_from_json, normalize};
