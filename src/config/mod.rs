// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.validate().context("Invalid config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write_temp(file_name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), file_name));
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn loads_yaml_and_json() {
        let yaml = write_temp(
            "status.yaml",
            "name: Cache\nurl: redis://127.0.0.1:6379\nmemory_threshold: 1000000\n",
        )
        .await;
        let json = write_temp(
            "status.json",
            r#"{"name": "Jobs", "url": "redis://127.0.0.1:6380", "connect_timeout_secs": 2}"#,
        )
        .await;

        let from_yaml = load_config(&yaml).await.unwrap();
        let from_json = load_config(&json).await.unwrap();

        assert_eq!(from_yaml.name, "Cache");
        assert_eq!(from_yaml.memory_threshold, Some(1_000_000));
        assert_eq!(from_json.name, "Jobs");
        assert_eq!(from_json.connect_timeout_secs, 2);

        tokio::fs::remove_file(yaml).await.unwrap();
        tokio::fs::remove_file(json).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_invalid_file() {
        let path = write_temp("tls.yml", "name: Cache\nurl: rediss://127.0.0.1\n").await;

        assert!(load_config(&path).await.is_err());
        assert!(load_config("does-not-exist.yaml").await.is_err());

        tokio::fs::remove_file(path).await.unwrap();
    }
}
