//! Thin wrappers over the browser APIs the pages reach for.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Native confirmation dialog. Answers `false` when no window exists.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Native alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `scheme://host[:port]` of the running page.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Send the window to `url`, e.g. a `mailto:` link.
pub fn open_url(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Stop the page behind a modal from scrolling, or release it.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "unset" };
    let _ = body.style().set_property("overflow", value);
}

/// Copy `text`, falling back to a hidden textarea outside secure contexts.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    if window.is_secure_context() {
        let promise = window.navigator().clipboard().write_text(text);
        return JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| format!("{err:?}"));
    }

    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;
    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| format!("{err:?}"))?
        .dyn_into()
        .map_err(|_| "textarea cast failed")?;
    area.set_value(text);
    body.append_child(&area).map_err(|err| format!("{err:?}"))?;
    area.select();
    let copied = document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "document cast failed")?
        .exec_command("copy")
        .map_err(|err| format!("{err:?}"));
    area.remove();
    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err("copy command refused".to_string()),
        Err(err) => Err(err),
    }
}
