/// Shared list helpers: search matching, match highlighting, the search input
use leptos::prelude::*;

/// Types that can be matched against a free-text search query
pub trait Searchable {
    /// Case-insensitive match of the query against the searchable fields
    fn matches_filter(&self, filter: &str) -> bool;

    /// Value of the named field, for highlighting
    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Case-insensitive substring test; an empty haystack never matches a non-empty needle
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Highlight matches of `filter` in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Lowercasing can change byte lengths; only highlight when offsets line up
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value; clearing it from outside empties the box
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced input
    #[prop(into)]
    on_change: Callback<String>,
    /// Called when the clear button is pressed
    #[prop(into)]
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    input_id: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search artist, title, color or year...".to_string()
    } else {
        placeholder
    };

    // Local state for the input before the debounce fires
    let (input_value, set_input_value) = signal(String::new());

    // Only the latest keystroke's timer may apply its value
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        if value.get().is_empty() {
            generation.update_value(|g| *g += 1);
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(150).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_clear.run(());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                id=input_id
                class=move || if value.with(|v| v.is_empty()) { "form-control" } else { "form-control search-input--active" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            <button
                type="button"
                id="searchClear"
                class="search-input__clear"
                on:click=clear_filter
                title="Clear"
            >
                {crate::shared::icons::icon("x")}
            </button>
        </div>
    }
}
