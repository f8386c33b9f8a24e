//! 缩略图预览
//!
//! 每张图片在会话临时目录中生成一个 PNG 缩略图作为预览句柄，
//! 释放句柄即删除该文件；会话结束时临时目录整体删除。

use crate::error::{ClaimOcrError, Result};
use claim_ocr_common::{PreviewAllocator, UploadedFile};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct ThumbnailAllocator {
    dir: TempDir,
    max_size: u32,
    seq: usize,
}

impl ThumbnailAllocator {
    pub fn new(max_size: u32) -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("claim-ocr-preview-").tempdir()?;
        tracing::debug!(dir = %dir.path().display(), "预览目录");
        Ok(Self {
            dir,
            max_size: max_size.max(16),
            seq: 0,
        })
    }
}

impl PreviewAllocator for ThumbnailAllocator {
    type Blob = Vec<u8>;
    type Handle = PathBuf;
    type Error = ClaimOcrError;

    fn create(&mut self, file: &UploadedFile) -> Result<PathBuf> {
        let img = image::load_from_memory(&file.blob)
            .map_err(|e| ClaimOcrError::ImageLoad(format!("{}: {}", file.name, e)))?;

        let thumb = img.thumbnail(self.max_size, self.max_size);

        // 同名文件可能来自不同目录，用序号区分
        let stem = Path::new(&file.name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let path = self.dir.path().join(format!("{:03}-{}.png", self.seq, stem));
        self.seq += 1;

        thumb
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| ClaimOcrError::ImageLoad(format!("{}: {}", file.name, e)))?;

        Ok(path)
    }

    fn revoke(&mut self, handle: PathBuf) {
        if let Err(e) = std::fs::remove_file(&handle) {
            tracing::warn!(path = %handle.display(), error = %e, "预览删除失败");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim_ocr_common::FileIntake;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_thumbnail_created_and_scaled() {
        let mut allocator = ThumbnailAllocator::new(32).unwrap();
        let file = UploadedFile::from_bytes("id.png", png_bytes(128, 64));

        let path = allocator.create(&file).unwrap();
        assert!(path.exists());

        let thumb = image::open(&path).unwrap();
        assert!(thumb.width() <= 32 && thumb.height() <= 32);

        allocator.revoke(path.clone());
        assert!(!path.exists());
    }

    #[test]
    fn test_non_image_rejected() {
        let mut allocator = ThumbnailAllocator::new(32).unwrap();
        let file = UploadedFile::from_bytes("notes.jpg", b"not an image".to_vec());
        assert!(matches!(allocator.create(&file), Err(ClaimOcrError::ImageLoad(_))));
    }

    #[test]
    fn test_same_name_gets_distinct_paths() {
        let mut allocator = ThumbnailAllocator::new(32).unwrap();
        let a = allocator.create(&UploadedFile::from_bytes("a.png", png_bytes(4, 4))).unwrap();
        let b = allocator.create(&UploadedFile::from_bytes("a.png", png_bytes(5, 5))).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_intake_removes_thumbnails() {
        let allocator = ThumbnailAllocator::new(32).unwrap();
        let mut intake = FileIntake::new(allocator);
        intake.add_files(vec![
            UploadedFile::from_bytes("a.png", png_bytes(8, 8)),
            UploadedFile::from_bytes("b.png", png_bytes(9, 9)),
        ]);

        let paths: Vec<PathBuf> = intake.previews().iter().map(|p| p.handle.clone()).collect();
        assert!(paths.iter().all(|p| p.exists()));

        intake.remove_file(0);
        assert!(!paths[0].exists());
        assert!(paths[1].exists());

        intake.clear_all();
        assert!(!paths[1].exists());
    }
}
