//! Log Panel Component
//!
//! Collapsible view of the in-memory log buffer.

use leptos::prelude::*;
use rolling_logger::LogEntry;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<LogEntry>::new());

    let refresh = move |_| set_entries.set(rolling_logger::recent());

    view! {
        <details class="log-panel">
            <summary>"Activity log"</summary>
            <button on:click=refresh>"Refresh"</button>
            <ol>
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <li>{entry.to_string()}</li> })
                        .collect_view()
                }}
            </ol>
        </details>
    }
}
