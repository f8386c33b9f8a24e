//! 赔案处理单生成
//!
//! 目前只有确认环节，确认后直接报告成功，不调用任何后端。

use crate::types::ClaimFormState;

pub const CONFIRM_PROMPT: &str = "确认生成赔案处理单 Word？此操作不可逆，是否继续？";
pub const GENERATED_NOTICE: &str = "赔案处理单已生成！";

/// 同步的是/否确认
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// 始终给出同一答案（`--yes` 或测试用）
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Generated { notice: &'static str },
    Cancelled,
}

/// 确认后生成赔案处理单
pub fn generate_document<C: Confirm + ?Sized>(confirm: &mut C, form: &ClaimFormState) -> GenerateOutcome {
    if !confirm.confirm(CONFIRM_PROMPT) {
        tracing::info!("用户取消生成");
        return GenerateOutcome::Cancelled;
    }

    // TODO: 接入文书生成服务后在此提交表单（格式、存储位置待定）
    tracing::info!(
        policy_number = %form.policy_number,
        claim_number = %form.claim_number,
        "生成赔案处理单"
    );

    GenerateOutcome::Generated {
        notice: GENERATED_NOTICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingConfirm {
        answer: bool,
        prompts: Vec<String>,
    }

    impl Confirm for RecordingConfirm {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.prompts.push(prompt.to_string());
            self.answer
        }
    }

    #[test]
    fn test_generate_confirmed() {
        let mut confirm = RecordingConfirm { answer: true, prompts: vec![] };
        let outcome = generate_document(&mut confirm, &ClaimFormState::default());

        assert_eq!(outcome, GenerateOutcome::Generated { notice: "赔案处理单已生成！" });
        assert_eq!(confirm.prompts, vec![CONFIRM_PROMPT.to_string()]);
    }

    #[test]
    fn test_generate_declined() {
        let mut confirm = AutoConfirm(false);
        let form = ClaimFormState {
            policy_number: "P1".to_string(),
            ..Default::default()
        };
        let outcome = generate_document(&mut confirm, &form);

        assert_eq!(outcome, GenerateOutcome::Cancelled);
        assert_eq!(form.policy_number, "P1");
    }

    #[test]
    fn test_prompt_warns_irreversible() {
        assert!(CONFIRM_PROMPT.contains("不可逆"));
    }
}
