use crate::domain::a001_record::ui::fields::{SizeSelect, YearSelect};
use crate::domain::a001_record::ui::upload::{UploadControl, UploadTracker};
use chrono::Datelike;
use contracts::domain::a001_record::DiscSize;
use contracts::shared::media::MediaSettings;
use leptos::prelude::*;

/// Add-record form, posted to the collection page.
///
/// Fields other than year, size and the uploaded image are left to the browser.
#[component]
pub fn AddRecordForm(csrf_token: String, media: MediaSettings) -> impl IntoView {
    let year = RwSignal::new(chrono::Utc::now().year().to_string());
    let size = RwSignal::new(DiscSize::Twelve.form_value().to_string());
    let upload = UploadTracker::new();

    view! {
        <form name="add-record" method="post" class="record-form">
            <input type="hidden" name="csrf_token" value=csrf_token />

            <div class="form-group">
                <label for="artist">"Artist"</label>
                <input type="text" id="artist" name="artist" class="form-control" required=true />
            </div>

            <div class="form-group">
                <label for="title">"Title"</label>
                <input type="text" id="title" name="title" class="form-control" required=true />
            </div>

            <div class="form-group">
                <label for="color">"Color"</label>
                <input type="text" id="color" name="color" class="form-control" required=true />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Year"</label>
                    <YearSelect name="year" value=year on_change=move |v: String| year.set(v) />
                </div>
                <div class="form-group">
                    <label>"Size"</label>
                    <SizeSelect name="size" value=size on_change=move |v: String| size.set(v) />
                </div>
            </div>

            <div class="form-group">
                <label for="notes">"Notes"</label>
                <textarea id="notes" name="notes" class="form-control" rows="3" />
            </div>

            <div class="checkbox">
                <label>
                    <input type="checkbox" name="incoming" />
                    " In the mail"
                </label>
            </div>

            <UploadControl
                tracker=upload
                media=media
                gallery_id="gallery"
                url_field="add_image_url"
            />

            <div class="details-actions">
                <button type="submit" class="btn btn-primary" disabled=move || upload.is_busy()>
                    "Add Record"
                </button>
            </div>
        </form>
    }
}
