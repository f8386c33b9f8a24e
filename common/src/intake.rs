//! 图片接收与预览管理
//!
//! 文件列表与预览列表始终按下标对齐。预览句柄由 [`PreviewAllocator`] 分配，
//! 每条移除路径（单个删除、全部清除、会话结束）都会释放对应句柄。

use crate::types::{PreviewHandle, UploadedFile};
use std::fmt;

/// 预览句柄分配器
///
/// CLI 生成缩略图文件，浏览器创建 object URL。
/// `revoke` 按值接收句柄，同一个句柄不可能被释放两次。
pub trait PreviewAllocator {
    type Blob;
    type Handle;
    type Error: fmt::Display;

    fn create(&mut self, file: &UploadedFile<Self::Blob>) -> Result<Self::Handle, Self::Error>;

    fn revoke(&mut self, handle: Self::Handle);
}

/// `add_files` 的结果
#[derive(Debug)]
pub struct AddReport<E> {
    pub admitted: usize,
    pub duplicates: usize,
    /// 预览创建失败而未被接收的文件
    pub failed: Vec<(String, E)>,
}

impl<E> Default for AddReport<E> {
    fn default() -> Self {
        Self {
            admitted: 0,
            duplicates: 0,
            failed: Vec::new(),
        }
    }
}

pub struct FileIntake<A: PreviewAllocator> {
    allocator: A,
    files: Vec<UploadedFile<A::Blob>>,
    previews: Vec<PreviewHandle<A::Handle>>,
}

impl<A: PreviewAllocator> FileIntake<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            files: Vec::new(),
            previews: Vec::new(),
        }
    }

    pub fn files(&self) -> &[UploadedFile<A::Blob>] {
        &self.files
    }

    pub fn previews(&self) -> &[PreviewHandle<A::Handle>] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 是否已持有相同 (文件名, 字节数) 的文件
    pub fn contains(&self, name: &str, size: u64) -> bool {
        self.files.iter().any(|f| f.identity() == (name, size))
    }

    /// 接收用户选择的文件
    ///
    /// 与已持有文件重复的直接丢弃（同一批次内的重复同样丢弃）。
    pub fn add_files<I>(&mut self, selected: I) -> AddReport<A::Error>
    where
        I: IntoIterator<Item = UploadedFile<A::Blob>>,
    {
        let mut report = AddReport::default();

        for file in selected {
            if self.contains(&file.name, file.size) {
                tracing::debug!(name = %file.name, size = file.size, "重复文件，已忽略");
                report.duplicates += 1;
                continue;
            }

            match self.allocator.create(&file) {
                Ok(handle) => {
                    tracing::debug!(name = %file.name, size = file.size, "已添加文件");
                    self.previews.push(PreviewHandle {
                        name: file.name.clone(),
                        handle,
                    });
                    self.files.push(file);
                    report.admitted += 1;
                }
                Err(e) => {
                    tracing::warn!(name = %file.name, error = %e, "预览创建失败");
                    report.failed.push((file.name, e));
                }
            }
        }

        report
    }

    /// 删除指定下标的文件并释放其预览
    pub fn remove_file(&mut self, index: usize) -> Option<UploadedFile<A::Blob>> {
        if index >= self.files.len() {
            return None;
        }

        let preview = self.previews.remove(index);
        self.allocator.revoke(preview.handle);
        Some(self.files.remove(index))
    }

    /// 释放全部预览并清空列表
    pub fn clear_all(&mut self) {
        for preview in std::mem::take(&mut self.previews) {
            self.allocator.revoke(preview.handle);
        }
        self.files.clear();
    }
}

impl<A: PreviewAllocator> Drop for FileIntake<A> {
    fn drop(&mut self) {
        self.clear_all();
    }
}
