use crate::models::DataPoint;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub fn resolve_asset_path() -> PathBuf {
    if let Ok(path) = env::var("HEATMAP_ASSET_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("assets/heatmap-data.json")
}

/// Reads the static data asset once. Any failure is logged and leaves the
/// collection empty.
pub async fn load_points(path: &Path) -> Vec<DataPoint> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<DataPoint>>(&bytes) {
            Ok(points) => {
                info!(path = %path.display(), points = points.len(), "loaded heatmap data");
                points
            }
            Err(err) => {
                error!("failed to parse heatmap data: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "heatmap data asset not found");
            Vec::new()
        }
        Err(err) => {
            error!("failed to read heatmap data: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("heatmap_storage_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn loads_points_in_file_order() {
        let path = temp_path("ok");
        fs::write(
            &path,
            r#"[{"date":"2024-05-02","count":4},{"date":"2024-01-09","count":0}]"#,
        )
        .await
        .unwrap();

        let points = load_points(&path).await;
        let _ = fs::remove_file(&path).await;

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date.to_string(), "2024-05-02");
        assert_eq!(points[1].count, 0);
    }

    #[tokio::test]
    async fn missing_file_yields_empty_collection() {
        let points = load_points(&temp_path("missing")).await;
        assert!(points.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_yields_empty_collection() {
        let path = temp_path("malformed");
        fs::write(&path, b"{ not json").await.unwrap();

        let points = load_points(&path).await;
        let _ = fs::remove_file(&path).await;

        assert!(points.is_empty());
    }
}
