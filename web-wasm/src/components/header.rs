//! 页头组件

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"养殖业保险理赔 - 材料识别"</h1>
        </header>
    }
}
