//! 错误情况测试
//!
//! 各类错误条件下的处理与提示文本

use claim_ocr::error::ClaimOcrError;
use claim_ocr::scanner;
use claim_ocr::snapshot::ClaimSnapshot;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 扫描不存在的文件夹
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(matches!(result.unwrap_err(), ClaimOcrError::FolderNotFound(_)));
}

/// 空文件夹返回空列表而不是错误
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path(), false);
    assert!(result.unwrap().is_empty());
}

/// 指定的文件不存在
#[test]
fn test_collect_missing_file() {
    let result = scanner::collect_images(&[PathBuf::from("/nonexistent/身份证.jpg")], false);
    assert!(matches!(result.unwrap_err(), ClaimOcrError::FileNotFound(_)));
}

/// 快照文件损坏
#[test]
fn test_load_broken_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("claim.json");
    std::fs::write(&path, "{broken").unwrap();

    let result = ClaimSnapshot::load(&path);
    assert!(matches!(result.unwrap_err(), ClaimOcrError::JsonParse(_)));
}

/// 快照文件不存在
#[test]
fn test_load_missing_snapshot() {
    let result = ClaimSnapshot::load(Path::new("/nonexistent/claim.json"));
    assert!(matches!(result.unwrap_err(), ClaimOcrError::Io(_)));
}

/// Display 实现
#[test]
fn test_error_display() {
    let errors = vec![
        ClaimOcrError::Config("测试配置错误".to_string()),
        ClaimOcrError::FileNotFound("id.jpg".to_string()),
        ClaimOcrError::FolderNotFound("/path/to/folder".to_string()),
        ClaimOcrError::ImageLoad("bank.jpg".to_string()),
        ClaimOcrError::NoImagesFound("文件夹".to_string()),
        ClaimOcrError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
        assert_eq!(err.user_notice(), display);
    }
}

/// 共用错误的提示透传
#[test]
fn test_claim_error_notice() {
    let err: ClaimOcrError = claim_ocr_common::Error::NoFiles.into();
    assert_eq!(err.to_string(), "请上传图片");
    assert_eq!(err.user_notice(), "请上传图片");

    let err: ClaimOcrError = claim_ocr_common::Error::Transport("connection refused".into()).into();
    assert_eq!(err.user_notice(), "识别失败");
    assert!(err.to_string().contains("connection refused"));
}
