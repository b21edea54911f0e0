//! Collection page layout
//!
//! Toolbar (panel selector, search, export) on top, one region per panel below,
//! the edit modal and the follower feed for the owner.

use crate::domain::a001_record::filter::TableFilter;
use crate::domain::a001_record::ui::add::AddRecordForm;
use crate::domain::a001_record::ui::details::{EditRecordModal, EditRecordViewModel};
use crate::domain::a001_record::ui::list::{rows_for, RecordTable};
use crate::domain::a001_record::ui::search::SearchBar;
use crate::domain::a002_follower_record::ui::FollowerFeedList;
use crate::layout::view_selector::{PanelRegion, PanelSelector, ViewState};
use crate::shared::icons::icon;
use contracts::domain::a001_record::{DiscSize, Panel, TableKind};
use contracts::shared::page::PageBootstrap;
use leptos::prelude::*;

#[component]
pub fn CollectionPage(page: PageBootstrap, filter: TableFilter, view_state: ViewState) -> impl IntoView {
    let media = page.media_settings();
    let download_href = page.download_href();
    let is_owner = page.is_owner;
    let editor = is_owner.then(EditRecordViewModel::new);
    let records = page.records;

    let shelf_regions = DiscSize::ALL
        .into_iter()
        .map(|size| {
            let kind = TableKind::new(size, false);
            let rows = rows_for(&records, kind);
            view! {
                <PanelRegion state=view_state region=size.panel() dom_id=size.slug()>
                    <RecordTable
                        kind=kind
                        rows=rows
                        filter=filter
                        view_state=view_state
                        editor=editor
                    />
                </PanelRegion>
            }
        })
        .collect_view();

    let mail_tables = DiscSize::ALL
        .into_iter()
        .map(|size| {
            let kind = TableKind::new(size, true);
            let rows = rows_for(&records, kind);
            view! {
                <RecordTable
                    kind=kind
                    rows=rows
                    filter=filter
                    view_state=view_state
                    editor=editor
                />
            }
        })
        .collect_view();

    let add_region = is_owner.then(|| {
        let csrf_token = page.csrf_token.clone();
        let media = media.clone();
        view! {
            <PanelRegion state=view_state region=Panel::AddForm dom_id="add-record">
                <AddRecordForm csrf_token=csrf_token media=media />
            </PanelRegion>
        }
    });

    let edit_modal = editor.map(|vm| {
        view! { <EditRecordModal vm=vm csrf_token=page.csrf_token.clone() media=media.clone() /> }
    });

    let download = is_owner.then(|| {
        view! {
            <a class="btn btn-default collection__download" href=download_href>
                {icon("download")}
                " Download CSV"
            </a>
        }
    });

    let username = page.username.clone();
    let feed = view! {
        <aside class="collection__feed">
            <h4>"Recently added by followed collectors"</h4>
            <FollowerFeedList username=username />
        </aside>
    };

    view! {
        <div class="collection">
            <div class="collection__toolbar">
                <PanelSelector state=view_state is_owner=is_owner />
                <SearchBar records=records.clone() filter=filter view_state=view_state />
                {download}
            </div>

            {shelf_regions}

            <PanelRegion state=view_state region=Panel::Incoming dom_id="mail">
                {mail_tables}
            </PanelRegion>

            {add_region}
            {edit_modal}
            {feed}
        </div>
    }
}
