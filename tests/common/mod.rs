//! 集成测试共用: 模拟 OCR 服务、测试图片

#![allow(dead_code)]

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub len: usize,
}

pub struct MockOcr {
    pub url: String,
    state: Arc<MockState>,
}

struct MockState {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    parts: Mutex<Vec<ReceivedPart>>,
}

impl MockOcr {
    /// 启动一个返回固定状态码和响应体的 `/parse-docs`
    pub async fn start(status: u16, body: &str) -> Self {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status).expect("无效状态码"),
            body: body.to_string(),
            hits: AtomicUsize::new(0),
            parts: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/parse-docs", post(parse_docs))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("端口绑定失败");
        let addr = listener.local_addr().expect("无法获取地址");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("模拟服务异常退出");
        });

        Self {
            url: format!("http://{}/parse-docs", addr),
            state,
        }
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn parts(&self) -> Vec<ReceivedPart> {
        self.state.parts.lock().expect("锁已中毒").clone()
    }
}

async fn parse_docs(
    State(state): State<Arc<MockState>>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let len = field.bytes().await.map(|b| b.len()).unwrap_or(0);

        state.parts.lock().expect("锁已中毒").push(ReceivedPart {
            field: field_name,
            file_name,
            content_type,
            len,
        });
    }

    (state.status, state.body.clone())
}

/// 指定尺寸的 PNG（不同尺寸得到不同字节数）
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([20, 120, 200]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).expect("PNG 编码失败");
    buf.into_inner()
}

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(width, height)).expect("写入测试图片失败");
    path
}
