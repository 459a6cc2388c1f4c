pub mod app;
pub mod errors;
pub mod form;
pub mod grid;
pub mod handlers;
pub mod heatmap;
pub mod layout;
pub mod models;
pub mod palette;
pub mod render;
pub mod storage;
pub mod tooltip;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_points, resolve_asset_path};
