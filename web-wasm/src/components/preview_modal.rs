//! 图片放大预览

use leptos::prelude::*;
use web_sys::MouseEvent;
use crate::app::SessionHandle;

#[component]
pub fn PreviewModal(session: SessionHandle) -> impl IntoView {
    let modal = session.modal;

    view! {
        <Show when=move || modal.get().is_some()>
            // 点击遮罩关闭，点击图片本身不关闭
            <div class="preview-overlay" on:click=move |_| session.close_preview()>
                <img
                    class="preview-image"
                    src=move || modal.get().map(|m| m.url).unwrap_or_default()
                    alt=move || modal.get().map(|m| m.name).unwrap_or_default()
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}
