use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MODEL_URL: &str = "https://storage.googleapis.com/download.tensorflow.org/models/tflite/coco_ssd_mobilenet_v1_1.0_quant_2018_06_29.zip";
pub const DEFAULT_ASSETS_DIR: &str = "app/src/main/assets";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ARCHIVE_FILENAME: &str = "model.zip";
pub const MODEL_FILENAME: &str = "ssd_mobilenet_v1.tflite";
pub const LABELS_FILENAME: &str = "labelmap.txt";

/// Parameters for one pipeline run. Defaults reproduce the values the
/// SmartFocus build expects.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub model_url: String,
    pub assets_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            model_url: DEFAULT_MODEL_URL.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    pub fn archive_path(&self) -> PathBuf {
        self.assets_dir.join(ARCHIVE_FILENAME)
    }

    pub fn model_path(&self) -> PathBuf {
        self.assets_dir.join(MODEL_FILENAME)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.assets_dir.join(LABELS_FILENAME)
    }

    pub fn with_assets_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.assets_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_model_url<S: Into<String>>(mut self, url: S) -> Self {
        self.model_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_paths() {
        let config = FetchConfig::default();
        assert_eq!(
            config.archive_path(),
            PathBuf::from("app/src/main/assets/model.zip")
        );
        assert_eq!(
            config.model_path(),
            PathBuf::from("app/src/main/assets/ssd_mobilenet_v1.tflite")
        );
        assert_eq!(
            config.labels_path(),
            PathBuf::from("app/src/main/assets/labelmap.txt")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = FetchConfig::default()
            .with_assets_dir("/tmp/assets")
            .with_model_url("http://localhost:8080/model.zip");
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/assets"));
        assert_eq!(config.model_url, "http://localhost:8080/model.zip");
    }
}
