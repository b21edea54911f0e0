use crate::domain::a001_record::filter::{results_counter, TableFilter};
use crate::layout::view_selector::ViewState;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_record::RecordRow;
use leptos::prelude::*;
use thaw::*;

/// Search box with the result counter; hidden while the incoming panel is active
#[component]
pub fn SearchBar(records: Vec<RecordRow>, filter: TableFilter, view_state: ViewState) -> impl IntoView {
    let counter = Memo::new(move |_| {
        let regions = view_state.visible_regions();
        filter
            .query
            .with(|q| results_counter(&records, q, regions))
    });

    view! {
        <div
            class="search-bar"
            style:display=move || if view_state.search_visible() { "" } else { "none" }
        >
            <SearchInput
                value=filter.query
                on_change=move |q: String| filter.set_query(q)
                on_clear=move |_: ()| filter.clear()
                input_id="search"
            />
            {move || counter.get().map(|text| view! {
                <span id="results" class="search-bar__results">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {text}
                    </Badge>
                </span>
            })}
        </div>
    }
}
