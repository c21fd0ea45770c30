pub mod interactions;

pub use interactions::{Action, InteractionController, PointerPosition, Tooltip, DEFAULT_HOVER_DELAY};
