use leptos::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"📁"</div>
            <p>"No files uploaded yet"</p>
        </div>
    }
}
