//! OCR 接口请求校验与响应解析
//!
//! CLI(reqwest) 与浏览器(fetch) 共用同一套规则。

use crate::error::{Error, Result};
use crate::types::OcrResult;

/// 默认 OCR 接口地址
pub const DEFAULT_OCR_ENDPOINT: &str = "http://localhost:8011/parse-docs";

/// multipart 中每张图片使用的字段名
pub const FILES_FIELD: &str = "files";

/// 后端单次允许的最大图片数
pub const MAX_FILES: usize = 20;

/// 提交前校验
///
/// 校验失败时不应发起任何网络请求。
pub fn validate_submission(count: usize, max: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::NoFiles);
    }
    if count > max {
        return Err(Error::TooManyFiles { max, actual: count });
    }
    Ok(())
}

/// 解析 OCR 接口响应
///
/// # Arguments
/// * `status` - HTTP 状态码
/// * `body` - 响应体文本
///
/// # Returns
/// * `Ok(OcrResult)` - 2xx 且响应体为 JSON 对象
/// * `Err(Error::Parse)` - 状态码非 2xx，或响应体无法解析
pub fn decode_ocr_response(status: u16, body: &str) -> Result<OcrResult> {
    if !(200..300).contains(&status) {
        return Err(Error::Parse(format!("HTTP {}: {}", status, truncate(body, 200))));
    }

    let value: serde_json::Value = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("JSON 解析错误: {}", e)))?;

    // 数组也能按顺序反序列化为结构体，这里只接受对象
    if !value.is_object() {
        return Err(Error::Parse("响应不是 JSON 对象".into()));
    }

    serde_json::from_value(value).map_err(|e| Error::Parse(format!("字段类型错误: {}", e)))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}
