//! 上传区组件

use leptos::html;
use leptos::prelude::*;
use crate::app::{PreviewItem, SessionHandle};

#[component]
pub fn UploadPanel(session: SessionHandle) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    let on_change = move |_| {
        if let Some(input) = input_ref.get() {
            if let Some(files) = input.files() {
                session.add_file_list(&files);
            }
            // 清空后可再次选择同一文件
            input.set_value("");
        }
    };

    let busy = session.busy;
    let previews = session.previews;
    let has_files = move || !previews.get().is_empty();

    view! {
        <div class="upload-panel">
            <h3>"📎 上传材料"</h3>
            <p class="text-muted">"请上传身份证、银行卡、系统截图等图片"</p>

            <label class="btn btn-outline">
                "📁 选择图片"
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    style="display: none"
                    node_ref=input_ref
                    on:change=on_change
                />
            </label>

            <p class="caption">
                {move || format!("当前文件数量: {}", previews.get().len())}
            </p>

            <Show
                when=has_files
                fallback=|| view! { <p class="text-muted">"尚未选择图片"</p> }
            >
                <div class="thumb-grid">
                    <For
                        each=move || previews.get()
                        key=|item| item.url.clone()
                        children=move |item| view! { <Thumbnail item=item session=session /> }
                    />
                </div>
            </Show>

            <div class="upload-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || previews.get().is_empty() || busy.get()
                    on:click=move |_| session.recognize()
                >
                    <Show when=move || busy.get() fallback=|| "🔍 开始识别">
                        <span class="spinner"></span>
                        " 识别中..."
                    </Show>
                </button>

                <Show when=has_files>
                    <button
                        class="btn btn-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| session.clear()
                    >
                        "🗑️ 清除所有文件"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Thumbnail(item: PreviewItem, session: SessionHandle) -> impl IntoView {
    let open_url = item.url.clone();
    let remove_url = item.url.clone();
    let name = item.name.clone();

    view! {
        <div class="thumb">
            <img
                src=item.url.clone()
                alt=item.name.clone()
                title="点击放大"
                on:click=move |_| session.open_preview(&open_url)
            />
            <button
                class="thumb-remove"
                title="删除"
                disabled=move || session.busy.get()
                on:click=move |_| session.remove(&remove_url)
            >
                "×"
            </button>
            <span class="thumb-name">{name}</span>
        </div>
    }
}
