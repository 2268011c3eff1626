//! Generic overlay dialog shared by the detail and edit views.

use leptos::prelude::*;

/// Backdrop click, the close button, and `Escape` all call `on_close`.
#[component]
pub fn Modal(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="modal__backdrop" on:click=on_backdrop>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <div class="modal__header">
                    <h2>{title}</h2>
                    <button class="modal__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}

/// One label/value row inside a detail modal.
#[component]
pub fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "N/A".to_owned() } else { value };
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}
