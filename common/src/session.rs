//! 会话状态
//!
//! 一个会话持有: 已上传图片与预览、表单、识别中标记、放大预览状态。
//! 识别流程: idle → busy (begin_recognition) → idle (finish_recognition)。

use crate::error::{Error, Result};
use crate::intake::{AddReport, FileIntake, PreviewAllocator};
use crate::merge::merge;
use crate::parser::{validate_submission, MAX_FILES};
use crate::summary::{render_summary, ClaimSummary};
use crate::types::{ClaimFormState, OcrResult, PreviewHandle, UploadedFile};

pub struct ClaimSession<A: PreviewAllocator> {
    intake: FileIntake<A>,
    form: ClaimFormState,
    busy: bool,
    /// 放大预览中的图片下标
    modal: Option<usize>,
    max_files: usize,
}

impl<A: PreviewAllocator> ClaimSession<A> {
    pub fn new(allocator: A) -> Self {
        Self::with_form(allocator, ClaimFormState::default())
    }

    pub fn with_form(allocator: A, form: ClaimFormState) -> Self {
        Self {
            intake: FileIntake::new(allocator),
            form,
            busy: false,
            modal: None,
            max_files: MAX_FILES,
        }
    }

    pub fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    pub fn form(&self) -> &ClaimFormState {
        &self.form
    }

    pub fn files(&self) -> &[UploadedFile<A::Blob>] {
        self.intake.files()
    }

    pub fn previews(&self) -> &[PreviewHandle<A::Handle>] {
        self.intake.previews()
    }

    pub fn summary(&self) -> ClaimSummary {
        render_summary(&self.form)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// “开始识别”是否可用
    pub fn can_recognize(&self) -> bool {
        !self.intake.is_empty() && !self.busy
    }

    pub fn add_files<I>(&mut self, selected: I) -> AddReport<A::Error>
    where
        I: IntoIterator<Item = UploadedFile<A::Blob>>,
    {
        self.intake.add_files(selected)
    }

    /// 删除图片；若正在放大预览该图则先关闭
    pub fn remove_file(&mut self, index: usize) -> Option<UploadedFile<A::Blob>> {
        match self.modal {
            Some(open) if open == index => self.modal = None,
            Some(open) if open > index && index < self.intake.len() => self.modal = Some(open - 1),
            _ => {}
        }
        self.intake.remove_file(index)
    }

    pub fn clear_all(&mut self) {
        self.modal = None;
        self.intake.clear_all();
    }

    /// 打开放大预览；下标越界时不改变当前状态并返回 None
    pub fn open_preview(&mut self, index: usize) -> Option<&PreviewHandle<A::Handle>> {
        if index >= self.intake.len() {
            return None;
        }
        self.modal = Some(index);
        self.preview_modal()
    }

    pub fn close_preview(&mut self) {
        self.modal = None;
    }

    pub fn preview_modal(&self) -> Option<&PreviewHandle<A::Handle>> {
        self.modal.and_then(|i| self.intake.previews().get(i))
    }

    /// 进入识别中状态
    ///
    /// 无图片或已在识别中时拒绝，且不改变任何状态。
    pub fn begin_recognition(&mut self) -> Result<()> {
        if self.busy {
            return Err(Error::Busy);
        }
        validate_submission(self.intake.len(), self.max_files)?;
        self.busy = true;
        Ok(())
    }

    /// 结束识别并回到空闲状态
    ///
    /// 成功时合并结果；失败时表单保持不变并返回错误。
    pub fn finish_recognition(&mut self, result: Result<OcrResult>) -> Result<&ClaimFormState> {
        self.busy = false;
        match result {
            Ok(ocr) => {
                self.form = merge(&self.form, &ocr);
                Ok(&self.form)
            }
            Err(e) => {
                tracing::error!(error = %e, "识别失败");
                Err(e)
            }
        }
    }
}
