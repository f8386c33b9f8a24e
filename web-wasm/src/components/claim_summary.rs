//! 赔案处理单（只读）

use leptos::prelude::*;
use claim_ocr_common::{render_summary, ClaimFormState, SectionBody, SummaryField, SummarySection};

#[component]
pub fn ClaimSummaryView(form: RwSignal<ClaimFormState>) -> impl IntoView {
    let summary = Memo::new(move |_| render_summary(&form.get()));

    view! {
        <div class="claim-summary">
            <h2 class="summary-title">{move || summary.get().title}</h2>
            {move || {
                summary
                    .get()
                    .sections
                    .into_iter()
                    .map(section_view)
                    .collect_view()
            }}
        </div>
    }
}

fn section_view(section: SummarySection) -> impl IntoView {
    let body = match section.body {
        SectionBody::Fields(fields) => view! {
            <div class="field-grid">
                {fields.into_iter().map(field_view).collect_view()}
            </div>
        }
        .into_any(),
        SectionBody::Narrative(parts) => view! {
            <p class="narrative">
                {parts
                    .into_iter()
                    .map(|part| {
                        if part.emphasis {
                            view! { <strong>{part.text}</strong> }.into_any()
                        } else {
                            view! { <span>{part.text}</span> }.into_any()
                        }
                    })
                    .collect_view()}
            </p>
        }
        .into_any(),
    };

    view! {
        <section class="summary-section">
            <h4>{section.title}</h4>
            {body}
        </section>
    }
}

fn field_view(field: SummaryField) -> impl IntoView {
    let value = field.display_value().to_string();
    view! {
        <div class="display-field">
            <label>{field.label}</label>
            <div class="value">{value}</div>
        </div>
    }
}
