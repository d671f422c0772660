//! PDF drop zone with drag & drop and file picker support.
//!
//! Both paths end in [`UploadController::add_files`]; filtering happens
//! there, not in the picker's `accept` hint.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};

use crate::services::{candidates_from_list, UploadController};
use crate::{limit_hint, FILE_INPUT_ACCEPT};

#[component]
pub fn UploadSection(controller: UploadController) -> impl IntoView {
    let state = controller.state();
    let file_input = create_node_ref::<html::Input>();
    let is_dragging = Signal::derive(move || state.with(|s| s.is_dragging()));
    let hint = state.with_untracked(|s| limit_hint(s.config()));

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        controller.set_dragging(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        controller.set_dragging(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        controller.set_dragging(false);
        let files = ev.data_transfer().and_then(|dt| dt.files());
        controller.add_files(candidates_from_list(files));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        controller.add_files(candidates_from_list(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-section"
            class:dragging=move || is_dragging.get()
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
            on:click=open_picker
        >
            <div class="upload-icon">"⬆️"</div>
            <h3 class="upload-text">
                {move || if is_dragging.get() {
                    "Drop your files here"
                } else {
                    "Upload your PDF files"
                }}
            </h3>
            <p class="upload-hint">
                "Drag and drop files here, or " <span class="upload-browse">"browse"</span>
            </p>
            <p class="upload-hint small">{hint}</p>
        </div>

        <input
            type="file"
            multiple
            accept=FILE_INPUT_ACCEPT
            style="display:none"
            node_ref=file_input
            on:change=on_file_change
        />
    }
}
