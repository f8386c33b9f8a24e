//! 交互式录入
//!
//! 与网页版相同的操作: 选择图片、删除、清除、预览、识别、查看处理单、生成。

use crate::error::Result;
use crate::ocr::OcrClient;
use crate::workflow::{self, CliSession, PromptConfirm};
use claim_ocr_common::generate_document;
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// 菜单操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddImages,
    RemoveImage,
    ClearAll,
    Preview,
    Recognize,
    ShowSummary,
    Generate,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddImages => "📁 选择图片",
            MenuAction::RemoveImage => "✖ 删除图片",
            MenuAction::ClearAll => "🗑️ 清除所有文件",
            MenuAction::Preview => "🔍 查看预览",
            MenuAction::Recognize => "🔍 开始识别",
            MenuAction::ShowSummary => "📋 查看赔案处理单",
            MenuAction::Generate => "📄 生成赔案处理单 Word",
            MenuAction::Quit => "退出",
        }
    }
}

/// 当前可用的操作（无图片时隐藏删除、清除、预览、识别）
pub fn available_actions(file_count: usize, busy: bool) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::AddImages];
    if file_count > 0 {
        actions.push(MenuAction::RemoveImage);
        if !busy {
            actions.push(MenuAction::ClearAll);
        }
        actions.push(MenuAction::Preview);
        if !busy {
            actions.push(MenuAction::Recognize);
        }
    }
    actions.extend([MenuAction::ShowSummary, MenuAction::Generate, MenuAction::Quit]);
    actions
}

fn pick_file(session: &CliSession, prompt: &str) -> Result<Option<usize>> {
    let names: Vec<String> = session
        .files()
        .iter()
        .map(|f| format!("{} ({} bytes)", f.name, f.size))
        .collect();

    Ok(Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact_opt()?)
}

pub async fn run_session(mut session: CliSession, client: &OcrClient) -> Result<()> {
    println!("📎 上传材料: 请上传身份证、银行卡、系统截图等\n");

    loop {
        let actions = available_actions(session.files().len(), session.is_busy());
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let choice = Select::new()
            .with_prompt(format!("当前文件数量: {}", session.files().len()))
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(action) = choice.map(|i| actions[i]) else {
            break;
        };

        match action {
            MenuAction::AddImages => {
                let input: String = Input::new()
                    .with_prompt("图片或文件夹路径（空格分隔）")
                    .interact_text()?;
                let paths: Vec<PathBuf> = input.split_whitespace().map(PathBuf::from).collect();
                if let Err(e) = workflow::add_paths(&mut session, &paths, false) {
                    println!("✘ {}", e);
                }
            }
            MenuAction::RemoveImage => {
                if let Some(index) = pick_file(&session, "删除哪张图片")? {
                    if let Some(removed) = session.remove_file(index) {
                        println!("✔ 已删除 {}", removed.name);
                    }
                }
            }
            MenuAction::ClearAll => {
                session.clear_all();
                println!("✔ 已清除所有文件");
            }
            MenuAction::Preview => {
                if let Some(index) = pick_file(&session, "预览哪张图片")? {
                    if let Some(preview) = session.open_preview(index) {
                        println!("🖼  {} → {}", preview.name, preview.handle.display());
                    }
                    Input::<String>::new()
                        .with_prompt("按回车关闭预览")
                        .allow_empty(true)
                        .interact_text()?;
                    session.close_preview();
                }
            }
            MenuAction::Recognize => {
                if let Err(e) = workflow::run_recognition(&mut session, client).await {
                    tracing::debug!(error = %e, "识别失败详情");
                    println!("✘ {}", e.user_notice());
                }
            }
            MenuAction::ShowSummary => {
                println!("\n{}", session.summary().to_text());
            }
            MenuAction::Generate => {
                let outcome = generate_document(&mut PromptConfirm, session.form());
                if let claim_ocr_common::GenerateOutcome::Generated { notice } = outcome {
                    println!("✅ {}", notice);
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_without_files() {
        let actions = available_actions(0, false);
        assert!(!actions.contains(&MenuAction::Recognize));
        assert!(!actions.contains(&MenuAction::ClearAll));
        assert!(actions.contains(&MenuAction::AddImages));
        assert!(actions.contains(&MenuAction::Generate));
    }

    #[test]
    fn test_actions_with_files() {
        let actions = available_actions(2, false);
        assert!(actions.contains(&MenuAction::Recognize));
        assert!(actions.contains(&MenuAction::RemoveImage));
        assert!(actions.contains(&MenuAction::ClearAll));
        assert_eq!(actions.last(), Some(&MenuAction::Quit));
    }

    #[test]
    fn test_actions_while_busy() {
        let actions = available_actions(2, true);
        assert!(!actions.contains(&MenuAction::Recognize));
        assert!(!actions.contains(&MenuAction::ClearAll));
    }
}
