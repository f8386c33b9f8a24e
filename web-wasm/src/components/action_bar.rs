//! 生成按钮

use leptos::prelude::*;
use crate::app::SessionHandle;

#[component]
pub fn ActionBar(session: SessionHandle) -> impl IntoView {
    view! {
        <div class="action-bar">
            <button
                class="btn btn-success"
                disabled=move || session.busy.get()
                on:click=move |_| session.generate()
            >
                "📄 生成赔案处理单 Word"
            </button>
        </div>
    }
}
