use crate::domain::a001_record::filter::TableFilter;
use crate::domain::a001_record::ui::details::EditRecordViewModel;
use crate::layout::view_selector::ViewState;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_record::{RecordRow, TableKind};
use leptos::prelude::*;

/// Rows of one table, in server order
pub fn rows_for(records: &[RecordRow], kind: TableKind) -> Vec<RecordRow> {
    records
        .iter()
        .filter(|row| row.table() == Some(kind))
        .cloned()
        .collect()
}

/// Collection table for one size, either on the shelf or in the mail.
///
/// `editor` is only passed for the owner; without it rows have no edit affordance.
#[component]
pub fn RecordTable(
    kind: TableKind,
    rows: Vec<RecordRow>,
    filter: TableFilter,
    view_state: ViewState,
    #[prop(default = None)] editor: Option<EditRecordViewModel>,
) -> impl IntoView {
    let container_id = kind.container_id();
    let heading = if kind.incoming {
        format!("{} in the mail", kind.size.label())
    } else {
        format!("{} ({})", kind.size.label(), rows.len())
    };
    let editable = editor.is_some();

    let body = rows
        .into_iter()
        .map(|row| {
            let visible_row = row.clone();
            let display = move || {
                if filter.shows(&visible_row, view_state.visible_regions()) {
                    ""
                } else {
                    "none"
                }
            };

            let cell = move |text: String| {
                move || filter.query.with(|q| highlight_matches(&text, q))
            };

            let edit_cell = editor.map(|vm| {
                let row = row.clone();
                let container_id = container_id.clone();
                view! {
                    <td class="record-actions">
                        <span
                            class="edit-pencil"
                            data-target=".edit-modal"
                            title="Edit"
                            on:click=move |_| vm.edit_row(&row, &container_id)
                        >
                            {icon("edit")}
                        </span>
                    </td>
                }
            });

            view! {
                <tr data-record-id=row.id.clone() style:display=display>
                    <td>{cell(row.artist.clone())}</td>
                    <td>{cell(row.title.clone())}</td>
                    <td>{cell(row.color.clone())}</td>
                    <td>{cell(row.year_text())}</td>
                    <td class="record-notes">{row.notes.clone()}</td>
                    <td class="record-added">{format_date(&row.timestamp)}</td>
                    {edit_cell}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div id=container_id.clone() class="record-table">
            <h4 class="record-table__heading">{heading}</h4>
            <table class="table table-hover">
                <thead>
                    <tr>
                        <th>"Artist"</th>
                        <th>"Title"</th>
                        <th>"Color"</th>
                        <th>"Year"</th>
                        <th>"Notes"</th>
                        <th>"Added"</th>
                        {editable.then(|| view! { <th></th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
