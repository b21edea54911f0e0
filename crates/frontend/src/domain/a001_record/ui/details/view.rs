use super::view_model::EditRecordViewModel;
use crate::domain::a001_record::ui::fields::{SizeSelect, YearSelect};
use crate::domain::a001_record::ui::upload::UploadControl;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_record::DiscSize;
use contracts::shared::media::MediaSettings;
use leptos::prelude::*;

/// Edit form for one record, posted back to the collection page
#[component]
pub fn EditRecordModal(
    vm: EditRecordViewModel,
    csrf_token: String,
    media: MediaSettings,
) -> impl IntoView {
    let on_close = Callback::new(move |_: ()| vm.close());

    move || {
        if !vm.open.get() {
            return view! { <></> }.into_any();
        }
        let csrf_token = csrf_token.clone();
        let media = media.clone();
        let busy = move || vm.upload.is_busy();
        let delete_link = view! {
            <a
                class="delete-record"
                title="Delete"
                href=move || vm.form.with(|f| f.delete_href())
            >
                {icon("trash")}
            </a>
        }
        .into_any();

        view! {
            <Modal
                title="Edit Record"
                on_close=on_close
                header_actions=delete_link
            >
                <form name="edit-record" method="post" class="record-form">
                    <input type="hidden" name="csrf_token" value=csrf_token />
                    <input type="hidden" name="edit_id" prop:value=move || vm.form.with(|f| f.id.clone()) />

                    <div class="form-group">
                        <label for="edit_artist">"Artist"</label>
                        <input
                            type="text"
                            id="edit_artist"
                            name="edit_artist"
                            class="form-control"
                            required=true
                            prop:value=move || vm.form.with(|f| f.artist.clone())
                            on:input=move |ev| vm.update(|f| f.artist = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="edit_title">"Title"</label>
                        <input
                            type="text"
                            id="edit_title"
                            name="edit_title"
                            class="form-control"
                            required=true
                            prop:value=move || vm.form.with(|f| f.title.clone())
                            on:input=move |ev| vm.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="edit_color">"Color"</label>
                        <input
                            type="text"
                            id="edit_color"
                            name="edit_color"
                            class="form-control"
                            required=true
                            prop:value=move || vm.form.with(|f| f.color.clone())
                            on:input=move |ev| vm.update(|f| f.color = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label>"Year"</label>
                            <YearSelect
                                name="edit_year"
                                value=Signal::derive(move || vm.form.with(|f| f.year.clone()))
                                on_change=move |year: String| vm.update(|f| f.year = year)
                            />
                        </div>
                        <div class="form-group">
                            <label>"Size"</label>
                            <SizeSelect
                                name="edit_size"
                                value=Signal::derive(move || vm.form.with(|f| f.size_value().to_string()))
                                on_change=move |value: String| {
                                    vm.update(|f| f.size = DiscSize::from_form_value(&value))
                                }
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="edit_notes">"Notes"</label>
                        <textarea
                            id="edit_notes"
                            name="edit_notes"
                            class="form-control"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.notes.clone())
                            on:input=move |ev| vm.update(|f| f.notes = event_target_value(&ev))
                        />
                    </div>

                    <div class="checkbox">
                        <label>
                            <input
                                type="checkbox"
                                name="edit_incoming"
                                prop:checked=move || vm.form.with(|f| f.incoming)
                                on:change=move |ev| vm.update(|f| f.incoming = event_target_checked(&ev))
                            />
                            " In the mail"
                        </label>
                    </div>

                    <UploadControl
                        tracker=vm.upload
                        media=media
                        gallery_id="edit_gallery"
                        url_field="image_url"
                    />

                    <div class="details-actions">
                        <button type="submit" class="btn btn-primary" disabled=busy>
                            "Save"
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| vm.close()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Modal>
        }
        .into_any()
    }
}
