pub mod drop;
pub mod history;
pub mod session;

pub use drop::{Bounds, DropPayload, DropPlan, DropPosition, EDGE_BAND, plan_drop, resolve_position};
pub use history::History;
pub use session::EditorSession;
