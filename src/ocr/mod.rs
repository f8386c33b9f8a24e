//! OCR 接口客户端
//!
//! 每张图片作为一个 `files` 字段提交，一次 POST 完成识别。

use crate::config::Config;
use claim_ocr_common::{
    decode_ocr_response, validate_submission, Error, OcrResult, Result, UploadedFile, FILES_FIELD,
};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

/// 根据文件名推断 MIME 类型，无法判断时按 JPEG 处理
pub fn guess_mime(file_name: &str) -> &'static str {
    image::ImageFormat::from_path(Path::new(file_name))
        .map(|f| f.to_mime_type())
        .unwrap_or("image/jpeg")
}

#[derive(Debug, Clone)]
pub struct OcrClient {
    http: reqwest::Client,
    endpoint: String,
    max_files: usize,
}

impl OcrClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, max_files: usize) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("HTTP 客户端初始化失败: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            max_files,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.endpoint(),
            Duration::from_secs(config.timeout_seconds),
            config.max_files,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(files: &[UploadedFile]) -> Result<Form> {
        // 与浏览器一致，文件名按 UTF-8 原样发送
        let mut form = Form::new().percent_encode_noop();
        for file in files {
            let part = Part::bytes(file.blob.clone())
                .file_name(file.name.clone())
                .mime_str(guess_mime(&file.name))
                .map_err(|e| Error::Transport(e.to_string()))?;
            form = form.part(FILES_FIELD, part);
        }
        Ok(form)
    }

    /// 识别图片
    ///
    /// 图片为空或超过上限时直接返回校验错误，不发起请求。
    pub async fn recognize(&self, files: &[UploadedFile]) -> Result<OcrResult> {
        validate_submission(files.len(), self.max_files)?;

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        tracing::info!(endpoint = %self.endpoint, files = ?names, "提交 OCR 识别");

        let form = Self::build_form(files)?;
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        tracing::debug!(status, body = %body, "OCR 响应");
        decode_ocr_response(status, &body)
    }
}
