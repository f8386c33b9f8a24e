//! 上传 → 识别 → 合并 的流程（`recognize` 与交互模式共用）

use crate::config::Config;
use crate::error::Result;
use crate::ocr::OcrClient;
use crate::preview::ThumbnailAllocator;
use crate::scanner;
use claim_ocr_common::{AddReport, ClaimFormState, ClaimSession, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

pub type CliSession = ClaimSession<ThumbnailAllocator>;

/// `--endpoint` 优先于环境变量和配置文件
pub fn client(config: &Config, endpoint: Option<String>) -> Result<OcrClient> {
    match endpoint {
        Some(url) => Ok(OcrClient::new(
            url,
            Duration::from_secs(config.timeout_seconds),
            config.max_files,
        )?),
        None => Ok(OcrClient::from_config(config)?),
    }
}

pub fn new_session(config: &Config, form: ClaimFormState) -> Result<CliSession> {
    let allocator = ThumbnailAllocator::new(config.thumbnail_size)?;
    Ok(ClaimSession::with_form(allocator, form).max_files(config.max_files))
}

/// 读取路径中的图片并加入会话
pub fn add_paths(
    session: &mut CliSession,
    paths: &[PathBuf],
    recursive: bool,
) -> Result<AddReport<crate::error::ClaimOcrError>> {
    let images = scanner::collect_images(paths, recursive)?;
    let files = scanner::load_files(&images)?;
    let report = session.add_files(files);

    println!(
        "✔ 新增 {} 张图片{}",
        report.admitted,
        if report.duplicates > 0 {
            format!("（忽略重复 {} 张）", report.duplicates)
        } else {
            String::new()
        }
    );
    for (name, e) in &report.failed {
        println!("  ✘ {}: {}", name, e);
    }
    println!("  当前文件数量: {}", session.files().len());

    Ok(report)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 提交识别并合并结果
///
/// 无论成功与否，返回时会话都回到空闲状态。
pub async fn run_recognition(session: &mut CliSession, client: &OcrClient) -> Result<()> {
    session.begin_recognition()?;

    let pb = spinner(&format!("识别中...（{} 张）", session.files().len()));
    let result = client.recognize(session.files()).await;
    pb.finish_and_clear();

    session.finish_recognition(result)?;
    println!("✔ 识别完成");
    Ok(())
}

/// dialoguer 的确认对话框
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        answer_or_cancel(
            dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact(),
        )
    }
}

/// 对话框出错（如非终端环境）时记录日志并按取消处理
fn answer_or_cancel(answer: dialoguer::Result<bool>) -> bool {
    match answer {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(error = %e, "确认对话框不可用，按取消处理");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_answer_passes_through() {
        assert!(answer_or_cancel(Ok(true)));
        assert!(!answer_or_cancel(Ok(false)));
    }

    #[test]
    fn test_prompt_error_counts_as_cancel() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "not a terminal",
        ));
        assert!(!answer_or_cancel(Err(err)));
    }
}
