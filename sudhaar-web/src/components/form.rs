//! Small bindings between form controls and `use_state` handles.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{Callback, Event, InputEvent, TargetCast, UseStateHandle};

/// Mirror a text input into `state` on every keystroke.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Like [`bind_input`], passing the raw value through `filter` first.
pub fn bind_filtered_input(
    state: &UseStateHandle<String>,
    filter: fn(&str) -> String,
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(filter(&input.value()));
        }
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
            state.set(area.value());
        }
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            state.set(select.value());
        }
    })
}

pub fn bind_checkbox(state: &UseStateHandle<bool>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |event: Event| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.checked());
        }
    })
}

/// First file picked in a file input, if any.
pub fn picked_file(event: &Event) -> Option<web_sys::File> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
