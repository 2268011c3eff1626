//! Media gallery screen.
//!
//! Everything here stays in the browser: picked files get object-URL
//! previews, "upload" only acknowledges them, and deletes edit the local list.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::{MediaItem, MediaKind};
use crate::state::gallery::{GalleryState, MEDIA_TABS, PendingFile, SORT_OPTIONS};
use crate::util::browser;
use crate::util::dates::format_date;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <AdminLayout title="Media Gallery">
            <GalleryScreen/>
        </AdminLayout>
    }
}

#[component]
fn GalleryScreen() -> impl IntoView {
    let state = RwSignal::new(GalleryState::default());
    on_cleanup(move || {
        if let Some(urls) = state.try_update_untracked(GalleryState::clear_selection) {
            browser::revoke_object_urls(&urls);
        }
    });

    #[cfg(feature = "hydrate")]
    let on_files = move |ev: leptos::ev::Event| {
        let files = browser::selected_files(&ev);
        let released = state.try_update(|s| s.select_files(files)).unwrap_or_default();
        browser::revoke_object_urls(&released);
    };
    #[cfg(not(feature = "hydrate"))]
    let on_files = move |_: leptos::ev::Event| {};

    let on_upload = move |_| {
        let released = state.try_update(GalleryState::simulate_upload).unwrap_or_default();
        browser::revoke_object_urls(&released);
    };
    let on_clear = move |_| {
        let released = state.try_update(GalleryState::clear_selection).unwrap_or_default();
        browser::revoke_object_urls(&released);
    };
    let on_delete = Callback::new(move |id: u64| {
        if browser::confirm("Delete this media item?") {
            state.update(|s| {
                s.remove(id);
            });
        }
    });

    let tabs = MEDIA_TABS
        .iter()
        .map(|(label, filter)| {
            let filter = *filter;
            let class = move || {
                if state.with(|s| s.query.category == filter) { "tab tab--active" } else { "tab" }
            };
            view! {
                <button class=class on:click=move |_| state.update(|s| s.query.set_category(filter))>
                    {*label}
                </button>
            }
        })
        .collect_view();

    let on_sort = move |ev| {
        let value = event_target_value(&ev);
        if let Some((_, order)) = SORT_OPTIONS.iter().find(|(label, _)| *label == value) {
            state.update(|s| s.query.set_sort(*order));
        }
    };

    let selection = move || {
        state.with(|s| {
            if s.selection.is_empty() {
                return None;
            }
            let count = s.selection.len();
            let previews = s.selection.iter().cloned().map(preview_tile).collect_view();
            Some(view! {
                <div class="gallery__selection">
                    <div class="gallery__grid">{previews}</div>
                    <div class="gallery__selection-actions">
                        <button class="btn btn--primary" on:click=on_upload>
                            {format!("Upload {count} File(s)")}
                        </button>
                        <button class="btn" on:click=on_clear>
                            "Clear"
                        </button>
                    </div>
                </div>
            })
        })
    };

    let grid = move || {
        let listing = state.with(GalleryState::visible);
        if listing.is_empty() {
            return view! { <p class="panel__empty">"No media found."</p> }.into_any();
        }
        let tiles = listing.rows.into_iter().map(|item| media_tile(item, on_delete)).collect_view();
        view! { <div class="gallery__grid">{tiles}</div> }.into_any()
    };

    view! {
        <section class="gallery">
            <div class="list-screen__toolbar">
                <label class="btn btn--primary gallery__picker">
                    "Select Files"
                    <input type="file" accept="image/*,video/*" multiple=true hidden=true on:change=on_files/>
                </label>
                <div class="tabs">{tabs}</div>
                <select class="field__input" on:change=on_sort>
                    {SORT_OPTIONS
                        .iter()
                        .map(|(label, order)| {
                            let order = *order;
                            view! {
                                <option value={*label} selected=move || state.with(|s| s.query.sort == Some(order))>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="gallery__notice">{move || state.with(|s| s.notice.clone().unwrap_or_default())}</p>
            </Show>
            {selection}
            {grid}
        </section>
    }
}

fn preview_tile(file: PendingFile) -> impl IntoView {
    let PendingFile { name, kind, preview_url, .. } = file;
    let media = match kind {
        MediaKind::Image => view! { <img src=preview_url alt=name.clone()/> }.into_any(),
        MediaKind::Video => view! { <video src=preview_url muted=true></video> }.into_any(),
    };
    view! {
        <figure class="gallery__tile gallery__tile--pending">
            {media}
            <figcaption>{name}</figcaption>
        </figure>
    }
}

fn media_tile(item: MediaItem, on_delete: Callback<u64>) -> impl IntoView {
    let id = item.id;
    let media = match item.kind {
        MediaKind::Image => view! { <img src=item.url.clone() alt="Gallery image"/> }.into_any(),
        MediaKind::Video => view! { <video src=item.url.clone() controls=true></video> }.into_any(),
    };
    view! {
        <figure class="gallery__tile">
            {media}
            <figcaption>
                <span class="gallery__meta">{format!("{} · {}", item.kind.as_str(), format_date(Some(item.uploaded_at.as_str())))}</span>
                <button class="btn btn--reject" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </figcaption>
        </figure>
    }
}
