use crate::domain::a001_record::ui::upload::UploadTracker;
use crate::shared::dom::probe_image;
use contracts::domain::a001_record::{delete_href, DiscSize, RecordRow, TableKind};
use contracts::shared::media::thumbnail_url;
use leptos::prelude::*;

/// Values of the edit form, filled from the clicked row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditRecordForm {
    pub id: String,
    pub artist: String,
    pub title: String,
    pub color: String,
    pub year: String,
    pub notes: String,
    pub size: Option<DiscSize>,
    pub incoming: bool,
}

impl EditRecordForm {
    /// Fill the form from a row and the id of the table container it sits in.
    ///
    /// Size and mail status come from the container id; the row's own values are the
    /// fallback when the id carries no size word.
    pub fn from_row(row: &RecordRow, container_id: &str) -> Self {
        let table = TableKind::from_container_id(container_id).or_else(|| row.table());
        Self {
            id: row.id.clone(),
            artist: row.artist.clone(),
            title: row.title.clone(),
            color: row.color.clone(),
            year: row.year_text(),
            notes: row.notes.clone(),
            size: table.map(|t| t.size),
            incoming: table.map(|t| t.incoming).unwrap_or(row.incoming),
        }
    }

    pub fn delete_href(&self) -> String {
        delete_href(&self.id)
    }

    pub fn size_value(&self) -> &'static str {
        self.size.map(|s| s.form_value()).unwrap_or("")
    }
}

/// State of the edit modal: which record is open and its image upload
#[derive(Clone, Copy)]
pub struct EditRecordViewModel {
    pub form: RwSignal<EditRecordForm>,
    pub open: RwSignal<bool>,
    pub upload: UploadTracker,
}

impl EditRecordViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EditRecordForm::default()),
            open: RwSignal::new(false),
            upload: UploadTracker::new(),
        }
    }

    /// Open the modal for a row rendered in the table `container_id`
    pub fn edit_row(&self, row: &RecordRow, container_id: &str) {
        let form = EditRecordForm::from_row(row, container_id);
        log::debug!("editing record {}", form.id);
        let record_id = form.id.clone();

        self.upload.reset();
        self.form.set(form);
        self.open.set(true);

        if let Some(image) = row.image() {
            self.load_preview(record_id, thumbnail_url(image));
        }
    }

    /// Show the record's thumbnail once it is known to load
    fn load_preview(&self, record_id: String, thumb: String) {
        let form = self.form;
        let preview = self.upload.preview;
        wasm_bindgen_futures::spawn_local(async move {
            match probe_image(&thumb).await {
                Ok(()) => {
                    // The modal may have moved on to another record meanwhile
                    if form.with_untracked(|f| f.id == record_id) && preview.get_untracked().is_none() {
                        preview.set(Some(thumb));
                    }
                }
                Err(e) => log::warn!("record {}: {}", record_id, e),
            }
        });
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn update(&self, f: impl FnOnce(&mut EditRecordForm)) {
        self.form.update(f);
    }
}

impl Default for EditRecordViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::media::UploadResponse;

    fn row() -> RecordRow {
        RecordRow {
            id: "42".to_string(),
            artist: "Artist A".to_string(),
            title: "Title B".to_string(),
            color: "Black".to_string(),
            year: Some(1977),
            notes: "note".to_string(),
            timestamp: "ts".to_string(),
            size: Some(DiscSize::Twelve),
            incoming: false,
            image_url: None,
        }
    }

    #[test]
    fn test_autofill_from_row() {
        let form = EditRecordForm::from_row(&row(), "twelve-inches");
        assert_eq!(form.id, "42");
        assert_eq!(form.artist, "Artist A");
        assert_eq!(form.title, "Title B");
        assert_eq!(form.color, "Black");
        assert_eq!(form.year, "1977");
        assert_eq!(form.notes, "note");
        assert_eq!(form.size, Some(DiscSize::Twelve));
        assert!(!form.incoming);
        assert_eq!(form.delete_href(), "delete-record/42");
        assert_eq!(form.size_value(), "3");
    }

    #[test]
    fn test_container_decides_size_and_mail() {
        let form = EditRecordForm::from_row(&row(), "seven-inches-mail");
        assert_eq!(form.size, Some(DiscSize::Seven));
        assert!(form.incoming);
    }

    #[test]
    fn test_unknown_container_falls_back_to_row() {
        let form = EditRecordForm::from_row(&row(), "collection");
        assert_eq!(form.size, Some(DiscSize::Twelve));
        assert!(!form.incoming);
    }

    #[test]
    fn test_row_without_year_or_size() {
        let bare = RecordRow {
            id: "7".to_string(),
            ..Default::default()
        };
        let form = EditRecordForm::from_row(&bare, "");
        assert_eq!(form.year, "");
        assert_eq!(form.size, None);
        assert_eq!(form.size_value(), "");
    }

    #[test]
    fn test_upload_for_previous_record_does_not_reach_next_one() {
        let vm = EditRecordViewModel::new();
        vm.edit_row(&row(), "twelve-inches");
        let ticket = vm.upload.begin();
        vm.close();

        let other = RecordRow {
            id: "43".to_string(),
            size: Some(DiscSize::Seven),
            ..Default::default()
        };
        vm.edit_row(&other, "seven-inches");
        vm.upload.complete(
            ticket,
            Ok(UploadResponse {
                secure_url: "https://host/for_42.jpg".to_string(),
            }),
        );

        assert_eq!(vm.form.get_untracked().id, "43");
        assert_eq!(vm.upload.image_url.get_untracked(), "");
        assert_eq!(vm.upload.preview.get_untracked(), None);
        assert_eq!(vm.upload.in_flight.get_untracked(), 0);
    }
}
