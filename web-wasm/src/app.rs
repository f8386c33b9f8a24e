//! 主应用组件

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::FileList;

use crate::api;
use crate::components::{
    action_bar::ActionBar,
    claim_summary::ClaimSummaryView,
    header::Header,
    preview_modal::PreviewModal,
    upload_panel::UploadPanel,
};
use crate::preview::{uploaded_from, ObjectUrlAllocator};
use claim_ocr_common::{generate_document, ClaimFormState, ClaimSession, Confirm, GenerateOutcome};

pub type WebSession = ClaimSession<ObjectUrlAllocator>;

/// 缩略图条目（显示用）
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewItem {
    pub name: String,
    pub url: String,
}

/// 浏览器确认框
struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        gloo::dialogs::confirm(prompt)
    }
}

/// 会话句柄
///
/// `ClaimSession` 持有 `web_sys::File`，只能放在本地存储中；
/// 视图读取的是每次操作后同步出来的信号。
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: StoredValue<WebSession, LocalStorage>,
    pub previews: RwSignal<Vec<PreviewItem>>,
    pub form: RwSignal<ClaimFormState>,
    pub busy: RwSignal<bool>,
    pub modal: RwSignal<Option<PreviewItem>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self {
            session: StoredValue::new_local(ClaimSession::new(ObjectUrlAllocator)),
            previews: RwSignal::new(Vec::new()),
            form: RwSignal::new(ClaimFormState::default()),
            busy: RwSignal::new(false),
            modal: RwSignal::new(None),
        }
    }

    fn sync(&self) {
        self.session.with_value(|s| {
            self.previews.set(
                s.previews()
                    .iter()
                    .map(|p| PreviewItem {
                        name: p.name.clone(),
                        url: p.handle.clone(),
                    })
                    .collect(),
            );
            self.form.set(s.form().clone());
            self.busy.set(s.is_busy());
            self.modal.set(s.preview_modal().map(|p| PreviewItem {
                name: p.name.clone(),
                url: p.handle.clone(),
            }));
        });
    }

    fn index_of(&self, url: &str) -> Option<usize> {
        self.session
            .with_value(|s| s.previews().iter().position(|p| p.handle == url))
    }

    pub fn add_file_list(&self, list: &FileList) {
        let selected: Vec<_> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(uploaded_from)
            .collect();

        self.session.update_value(|s| {
            let report = s.add_files(selected);
            for (name, err) in &report.failed {
                web_sys::console::warn_1(&JsValue::from_str(&format!("{}: {}", name, err)));
            }
        });
        self.sync();
    }

    pub fn remove(&self, url: &str) {
        if let Some(index) = self.index_of(url) {
            self.session.update_value(|s| {
                s.remove_file(index);
            });
            self.sync();
        }
    }

    pub fn clear(&self) {
        self.session.update_value(|s| s.clear_all());
        self.sync();
    }

    pub fn open_preview(&self, url: &str) {
        if let Some(index) = self.index_of(url) {
            self.session.update_value(|s| {
                s.open_preview(index);
            });
            self.sync();
        }
    }

    pub fn close_preview(&self) {
        self.session.update_value(|s| s.close_preview());
        self.sync();
    }

    /// 开始识别；完成后合并结果并回到空闲状态
    pub fn recognize(&self) {
        let mut started = Ok(Vec::new());
        self.session.update_value(|s| {
            started = s.begin_recognition().map(|_| s.files().to_vec());
        });
        self.sync();

        let files = match started {
            Ok(files) => files,
            Err(e) => {
                gloo::dialogs::alert(&e.user_notice());
                return;
            }
        };

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        web_sys::console::log_1(&JsValue::from_str(&format!("提交识别: {:?}", names)));

        let handle = *self;
        spawn_local(async move {
            let result = api::ocr::recognize(&files).await;

            let mut outcome = Ok(());
            handle.session.update_value(|s| {
                outcome = s.finish_recognition(result).map(|_| ());
            });
            handle.sync();

            if let Err(e) = outcome {
                web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                gloo::dialogs::alert(&e.user_notice());
            }
        });
    }

    pub fn generate(&self) {
        let form = self.form.get_untracked();
        if let GenerateOutcome::Generated { notice } = generate_document(&mut BrowserConfirm, &form) {
            gloo::dialogs::alert(notice);
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionHandle::new();

    view! {
        <div class="container">
            <Header />

            <div class="layout">
                <div class="summary-column">
                    <ClaimSummaryView form=session.form />
                    <ActionBar session=session />
                </div>
                <div class="upload-column">
                    <UploadPanel session=session />
                </div>
            </div>

            <PreviewModal session=session />
        </div>
    }
}
