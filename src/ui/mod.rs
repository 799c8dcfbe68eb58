//! Terminal UI scenes.

pub mod chart_scene;
pub mod setup_scene;
