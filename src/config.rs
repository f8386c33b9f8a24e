use crate::error::{ClaimOcrError, Result};
use claim_ocr_common::{ClaimFormState, DEFAULT_OCR_ENDPOINT, MAX_FILES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// OCR 接口地址的环境变量（优先于配置文件）
pub const ENDPOINT_ENV: &str = "CLAIM_OCR_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub ocr_endpoint: String,
    pub timeout_seconds: u64,
    pub max_files: usize,
    /// 缩略图最长边（像素）
    pub thumbnail_size: u32,
    /// 新表单的默认查勘方式，例如 "现场查勘"
    pub default_inspection_method: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr_endpoint: DEFAULT_OCR_ENDPOINT.into(),
            timeout_seconds: 60,
            max_files: MAX_FILES,
            thumbnail_size: 320,
            default_inspection_method: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "已读取配置");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ClaimOcrError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("claim-ocr").join("config.json"))
    }

    /// 实际使用的 OCR 接口地址
    pub fn endpoint(&self) -> String {
        // 环境变量优先
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.ocr_endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClaimOcrError::Config(format!("无效的接口地址: {}", url)));
        }
        self.ocr_endpoint = url;
        self.save()
    }

    /// 新会话的初始表单
    pub fn initial_form(&self) -> ClaimFormState {
        match &self.default_inspection_method {
            Some(method) => ClaimFormState::with_inspection_method(method.clone()),
            None => ClaimFormState::default(),
        }
    }
}
