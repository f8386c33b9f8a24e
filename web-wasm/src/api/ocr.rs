//! OCR 接口（fetch + FormData）

use claim_ocr_common::{
    decode_ocr_response, validate_submission, Error, OcrResult, Result, UploadedFile,
    DEFAULT_OCR_ENDPOINT, FILES_FIELD, MAX_FILES,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

fn js_err(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

/// 全部图片以 `files` 字段一次提交
pub async fn recognize(files: &[UploadedFile<File>]) -> Result<OcrResult> {
    validate_submission(files.len(), MAX_FILES)?;

    let form = FormData::new().map_err(js_err)?;
    for file in files {
        form.append_with_blob_and_filename(FILES_FIELD, &file.blob, &file.name)
            .map_err(js_err)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(DEFAULT_OCR_ENDPOINT, &opts).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window 不可用".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let body = text.as_string().unwrap_or_default();

    web_sys::console::log_2(&JsValue::from_str("OCR 响应:"), &JsValue::from_str(&body));
    decode_ocr_response(status, &body)
}
