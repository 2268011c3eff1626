//! Small web-sys wrappers used by the list screens.
//!
//! Outside the browser `confirm` answers `false` and no object URLs are made.

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Release preview URLs created by `selected_files`.
pub fn revoke_object_urls(urls: &[String]) {
    #[cfg(feature = "hydrate")]
    {
        for url in urls {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = urls;
    }
}

/// `(name, mime, preview_url)` for each file chosen in a file input.
#[cfg(feature = "hydrate")]
pub fn selected_files(ev: &leptos::ev::Event) -> Vec<(String, String, String)> {
    use wasm_bindgen::JsCast;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let files: Vec<(String, String, String)> = (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|file| {
            let url = web_sys::Url::create_object_url_with_blob(&file).ok()?;
            Some((file.name(), file.type_(), url))
        })
        .collect();
    // Allow picking the same files again.
    input.set_value("");
    files
}
