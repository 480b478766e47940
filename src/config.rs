// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// 短语模式
// ============================================================================

/// 多词输入的计算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhraseMode {
    /// 整个输入视为一个词，空格和其他非字母一起去掉
    #[default]
    Joined,
    /// 按空白切分，逐词计算
    PerWord,
}

// ============================================================================
// 输出格式
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// 应用配置
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub phrase_mode: PhraseMode,
    #[serde(default)]
    pub output_format: OutputFormat,
    /// 文本输出时附带希伯来字母
    #[serde(default)]
    pub show_hebrew: bool,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("Gematria").join("config.json"))
    }

    /// 从 `path` 加载配置
    ///
    /// 文件不存在时返回默认配置；文件损坏时记录警告并使用默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("配置文件 {:?} 不存在，使用默认配置", path);
            return Ok(Self::new());
        }

        tracing::info!("从 {:?} 加载配置", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("配置文件 {:?} 解析失败，使用默认配置: {}", path, e);
                Ok(Self::new())
            }
        }
    }

    /// 原子保存配置到 `path`
    ///
    /// 先写临时文件，旧文件移到 `.bak`，再把临时文件重命名到位；
    /// 重命名失败时从备份恢复
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        let backup_path = path.with_extension("json.bak");

        tracing::info!("保存配置到 {:?}", path);
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败 {:?}: {}", temp_path, e);
            e
        })?;

        if path.exists() {
            if backup_path.exists() {
                let _ = std::fs::remove_file(&backup_path);
            }
            std::fs::rename(path, &backup_path).map_err(|e| {
                tracing::error!("备份旧配置失败: {}", e);
                e
            })?;
        }

        match std::fs::rename(&temp_path, path) {
            Ok(_) => {
                let _ = std::fs::remove_file(&backup_path);
                Ok(())
            }
            Err(e) => {
                tracing::error!("重命名临时文件失败: {}", e);
                if backup_path.exists() {
                    if let Err(restore_err) = std::fs::rename(&backup_path, path) {
                        tracing::error!("恢复备份失败: {}", restore_err);
                    } else {
                        tracing::info!("已从备份恢复配置");
                    }
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_should_point_to_gematria_config_dir() {
        let path = AppConfig::config_path().expect("config path");
        let path_str = path.to_string_lossy().to_lowercase();
        assert!(path_str.contains("gematria"));
        assert!(path_str.ends_with("config.json"));
    }

    #[test]
    fn load_should_fallback_to_defaults_when_missing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let config = AppConfig::load_from(&temp.path().join("missing.json")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_should_fallback_to_defaults_when_corrupted() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write corrupt file");

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_should_fill_missing_fields_with_defaults() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"phrase_mode":"per_word"}"#).expect("write config");

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.phrase_mode, PhraseMode::PerWord);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.show_hebrew);
    }

    #[test]
    fn save_should_replace_existing_config() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("nested").join("config.json");

        AppConfig::default().save_to(&path).expect("first save");

        let config = AppConfig {
            phrase_mode: PhraseMode::PerWord,
            output_format: OutputFormat::Json,
            show_hebrew: true,
        };
        config.save_to(&path).expect("second save");

        assert_eq!(AppConfig::load_from(&path).expect("load"), config);
        assert!(!path.with_extension("json.tmp").exists());
        assert!(!path.with_extension("json.bak").exists());
    }
}
