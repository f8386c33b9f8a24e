//! 浏览器预览地址（object URL）的分配与回收

use claim_ocr_common::{PreviewAllocator, UploadedFile};
use wasm_bindgen::JsValue;
use web_sys::{File, Url};

/// 为每个已接收的文件创建 `blob:` 地址，删除时回收
#[derive(Debug, Default)]
pub struct ObjectUrlAllocator;

impl PreviewAllocator for ObjectUrlAllocator {
    type Blob = File;
    type Handle = String;
    type Error = String;

    fn create(&mut self, file: &UploadedFile<File>) -> Result<String, String> {
        Url::create_object_url_with_blob(&file.blob).map_err(|e| format!("{:?}", e))
    }

    fn revoke(&mut self, url: String) {
        if let Err(e) = Url::revoke_object_url(&url) {
            web_sys::console::warn_2(&JsValue::from_str("预览地址回收失败"), &e);
        }
    }
}

/// `FileList` 中的文件转为上传条目
pub fn uploaded_from(file: File) -> UploadedFile<File> {
    UploadedFile::new(file.name(), file.size() as u64, file)
}
