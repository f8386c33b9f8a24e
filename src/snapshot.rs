//! 识别结果快照（JSON）
//!
//! `recognize -o` 写出，`summary` / `generate` 读入。

use crate::error::Result;
use claim_ocr_common::ClaimFormState;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSnapshot {
    /// 识别时间 (RFC 3339)
    #[serde(default)]
    pub recognized_at: String,

    #[serde(default)]
    pub source_files: Vec<String>,

    pub form: ClaimFormState,
}

impl ClaimSnapshot {
    pub fn new(form: ClaimFormState, source_files: Vec<String>) -> Self {
        Self {
            recognized_at: chrono::Local::now().to_rfc3339(),
            source_files,
            form,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
