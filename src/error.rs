use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimOcrError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件夹不存在: {0}")]
    FolderNotFound(String),

    #[error("图片读取错误: {0}")]
    ImageLoad(String),

    #[error("未找到图片: {0}")]
    NoImagesFound(String),

    #[error("交互输入错误: {0}")]
    Prompt(String),

    #[error(transparent)]
    Claim(#[from] claim_ocr_common::Error),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl ClaimOcrError {
    /// 面向用户的提示（识别失败的细节只写日志）
    pub fn user_notice(&self) -> String {
        match self {
            ClaimOcrError::Claim(e) => e.user_notice(),
            other => other.to_string(),
        }
    }
}

impl From<dialoguer::Error> for ClaimOcrError {
    fn from(e: dialoguer::Error) -> Self {
        ClaimOcrError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClaimOcrError>;
