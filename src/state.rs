use crate::heatmap::Heatmap;
use crate::models::DataPoint;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub heatmap: Arc<Mutex<Heatmap>>,
}

impl AppState {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            heatmap: Arc::new(Mutex::new(Heatmap::new(points))),
        }
    }
}
