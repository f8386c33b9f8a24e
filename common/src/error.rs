//! 错误类型定义

use thiserror::Error;

/// 共用错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("配置错误: {0}")]
    Config(String),

    /// 没有可识别的图片，不会发起网络请求
    #[error("请上传图片")]
    NoFiles,

    #[error("最多上传 {max} 张图片（当前 {actual} 张）")]
    TooManyFiles { max: usize, actual: usize },

    /// 上一次识别尚未结束
    #[error("正在识别中，请稍候")]
    Busy,

    #[error("识别请求失败: {0}")]
    Transport(String),

    #[error("解析失败: {0}")]
    Parse(String),
}

impl Error {
    /// 面向用户的提示文本
    ///
    /// 传输和解析失败只给出笼统的“识别失败”，具体原因只写进日志。
    pub fn user_notice(&self) -> String {
        match self {
            Error::NoFiles | Error::TooManyFiles { .. } | Error::Busy => self.to_string(),
            Error::Transport(_) | Error::Parse(_) => "识别失败".to_string(),
            Error::Config(_) => self.to_string(),
        }
    }
}

/// Result型别名
pub type Result<T> = std::result::Result<T, Error>;
