// Header navigation model
pub mod navigation;

pub use navigation::{NavAction, NavEntry, NavSurface};
