use crate::app_shell::CollectionPage;
use crate::domain::a001_record::filter::TableFilter;
use crate::layout::view_selector::ViewState;
use crate::shared::dom::load_bootstrap;
use contracts::shared::page::PageBootstrap;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let page = load_bootstrap().unwrap_or_else(|e| {
        log::error!("page bootstrap unavailable, rendering an empty collection: {}", e);
        PageBootstrap::default()
    });
    log::info!(
        "collection of {} with {} records (owner: {})",
        page.username,
        page.records.len(),
        page.is_owner
    );

    let filter = TableFilter::new();
    let view_state = ViewState::restore(filter, page.is_owner);

    view! {
        <CollectionPage page=page filter=filter view_state=view_state />
    }
}
