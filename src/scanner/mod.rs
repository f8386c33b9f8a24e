use crate::error::{ClaimOcrError, Result};
use claim_ocr_common::UploadedFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp", "gif", "tif", "tiff"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

fn image_info(path: &Path) -> ImageInfo {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    ImageInfo {
        path: path.to_path_buf(),
        file_name,
    }
}

/// 列出文件夹下的图片（`recursive` 时包含子文件夹）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(ClaimOcrError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| is_image_extension(&ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .map(|e| image_info(e.path()))
        .collect();

    // 按文件名排序
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 命令行给出的文件与文件夹，按给出顺序展开
///
/// 直接指定的文件不检查扩展名，由预览生成时判断是否为图片。
pub fn collect_images(paths: &[PathBuf], recursive: bool) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = scan_folder(path, recursive)?;
            if found.is_empty() {
                return Err(ClaimOcrError::NoImagesFound(path.display().to_string()));
            }
            images.extend(found);
        } else if path.is_file() {
            images.push(image_info(path));
        } else {
            return Err(ClaimOcrError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(images)
}

/// 读入内存，作为待上传文件
pub fn load_files(images: &[ImageInfo]) -> Result<Vec<UploadedFile>> {
    images
        .iter()
        .map(|img| {
            let bytes = std::fs::read(&img.path)?;
            Ok(UploadedFile::from_bytes(img.file_name.clone(), bytes))
        })
        .collect()
}
