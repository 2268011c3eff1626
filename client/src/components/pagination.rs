//! Previous/next pager for paginated tables.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn pagination__prev"
                disabled=move || page.get() <= 1
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="pagination__label">
                {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="btn pagination__next"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
