use crate::domain::a001_record::api::upload_image;
use crate::shared::dom::{file_input_target, selected_files};
use crate::shared::icons::icon;
use contracts::shared::media::{thumbnail_url, MediaSettings, UploadResponse};
use leptos::prelude::*;
use thaw::*;

/// Inline style of a gallery preview box
pub fn gallery_style(preview: Option<&str>) -> String {
    match preview {
        Some(url) => format!(
            "background-image: url('{}'); background-size: cover; background-repeat: no-repeat; background-position: center center;",
            url
        ),
        None => "background-image: none;".to_string(),
    }
}

/// Upload state of one form (add or edit).
///
/// Every selected file is its own task; the control stays busy until all of them finish.
#[derive(Clone, Copy)]
pub struct UploadTracker {
    pub in_flight: RwSignal<usize>,
    /// Full URL of the last successful upload, posted with the form
    pub image_url: RwSignal<String>,
    /// Thumbnail shown in the gallery box
    pub preview: RwSignal<Option<String>>,
    /// Bumped by `reset`; uploads started before it no longer touch the form
    generation: RwSignal<u64>,
}

/// Handle of one started upload, tied to the form contents it was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self {
            in_flight: RwSignal::new(0),
            image_url: RwSignal::new(String::new()),
            preview: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Forget the uploaded URL and preview.
    ///
    /// Uploads still running keep their slot but their results are discarded.
    pub fn reset(&self) {
        self.generation.update(|g| *g += 1);
        self.image_url.set(String::new());
        self.preview.set(None);
    }

    pub fn begin(&self) -> UploadTicket {
        self.in_flight.update(|n| *n += 1);
        UploadTicket {
            generation: self.generation.get_untracked(),
        }
    }

    /// Finish one upload; the slot is released whether or not it succeeded
    pub fn complete(&self, ticket: UploadTicket, result: Result<UploadResponse, String>) {
        let current = ticket.generation == self.generation.get_untracked();
        match result {
            Ok(resp) if current => {
                let thumb = thumbnail_url(&resp.secure_url);
                log::debug!("uploaded {}", resp.secure_url);
                self.preview.set(Some(thumb));
                self.image_url.set(resp.secure_url);
            }
            Ok(resp) => log::warn!("discarding upload {} for a form that was reset", resp.secure_url),
            Err(e) => log::error!("image upload failed: {}", e),
        }
        self.in_flight.update(|n| *n = n.saturating_sub(1));
    }

    /// Begin one upload per item and hand each to `start` with its ticket
    pub fn dispatch<T>(&self, items: impl IntoIterator<Item = T>, mut start: impl FnMut(T, UploadTicket)) {
        for item in items {
            let ticket = self.begin();
            start(item, ticket);
        }
    }

    pub fn upload_files(&self, files: Vec<web_sys::File>, media: &MediaSettings) {
        let tracker = *self;
        self.dispatch(files, |file, ticket| {
            let media = media.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = upload_image(file, &media).await;
                tracker.complete(ticket, result);
            });
        });
    }
}

impl Default for UploadTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera button, hidden file input, gallery preview and the hidden URL field
#[component]
pub fn UploadControl(
    tracker: UploadTracker,
    media: MediaSettings,
    /// Id of the preview box
    gallery_id: &'static str,
    /// Form field that receives the uploaded URL
    url_field: &'static str,
) -> impl IntoView {
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_files = move |ev: leptos::ev::Event| {
        let Some(input) = file_input_target(&ev) else { return };
        let files = selected_files(&input);
        tracker.upload_files(files, &media);
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-control">
            <input
                type="file"
                accept="image/*"
                multiple=true
                style="display: none;"
                node_ref=file_input
                on:change=on_files
            />
            <Button
                class="upload-control__button"
                disabled=Signal::derive(move || tracker.is_busy())
                on_click=open_picker
            >
                {move || if tracker.is_busy() {
                    view! { <span class="spin"><Spinner /></span> }.into_any()
                } else {
                    icon("camera")
                }}
            </Button>
            <div
                id=gallery_id
                class="gallery"
                style=move || tracker.preview.with(|p| gallery_style(p.as_deref()))
            ></div>
            <input type="hidden" name=url_field prop:value=move || tracker.image_url.get() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_style() {
        assert_eq!(gallery_style(None), "background-image: none;");
        let style = gallery_style(Some("https://host/t.jpg"));
        assert!(style.starts_with("background-image: url('https://host/t.jpg');"));
        assert!(style.contains("background-size: cover;"));
    }

    #[test]
    fn test_each_file_is_its_own_upload() {
        let tracker = UploadTracker::new();
        let mut started = Vec::new();
        tracker.dispatch(["front.jpg", "back.jpg"], |name, ticket| started.push((name, ticket)));
        assert_eq!(started.len(), 2);
        assert_eq!(tracker.in_flight.get_untracked(), 2);

        for (name, ticket) in started {
            tracker.complete(
                ticket,
                Ok(UploadResponse {
                    secure_url: format!("https://host/{}", name),
                }),
            );
        }
        assert_eq!(tracker.in_flight.get_untracked(), 0);
        assert_eq!(tracker.image_url.get_untracked(), "https://host/back.jpg");
    }

    #[test]
    fn test_tracker_busy_until_every_upload_finishes() {
        let tracker = UploadTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        tracker.complete(
            first,
            Ok(UploadResponse {
                secure_url: "https://host/a/b/c/d/e/f/one.jpg".to_string(),
            }),
        );
        assert_eq!(tracker.in_flight.get_untracked(), 1);
        assert_eq!(tracker.image_url.get_untracked(), "https://host/a/b/c/d/e/f/one.jpg");
        assert_eq!(
            tracker.preview.get_untracked().as_deref(),
            Some("https://host/a/b/c/d/e/f/t_media_lib_thumb/one.jpg")
        );

        tracker.complete(second, Err("HTTP 500".to_string()));
        assert_eq!(tracker.in_flight.get_untracked(), 0);
        // A failed upload keeps the last good URL
        assert_eq!(tracker.image_url.get_untracked(), "https://host/a/b/c/d/e/f/one.jpg");
    }

    #[test]
    fn test_reset_clears_url_and_preview() {
        let tracker = UploadTracker::new();
        let ticket = tracker.begin();
        tracker.complete(
            ticket,
            Ok(UploadResponse {
                secure_url: "https://host/x.jpg".to_string(),
            }),
        );
        tracker.reset();
        assert_eq!(tracker.image_url.get_untracked(), "");
        assert_eq!(tracker.preview.get_untracked(), None);
    }

    #[test]
    fn test_upload_started_before_reset_is_discarded() {
        let tracker = UploadTracker::new();
        let stale = tracker.begin();
        tracker.reset();
        tracker.complete(
            stale,
            Ok(UploadResponse {
                secure_url: "https://host/old.jpg".to_string(),
            }),
        );
        assert_eq!(tracker.in_flight.get_untracked(), 0);
        assert_eq!(tracker.image_url.get_untracked(), "");
        assert_eq!(tracker.preview.get_untracked(), None);

        let fresh = tracker.begin();
        tracker.complete(
            fresh,
            Ok(UploadResponse {
                secure_url: "https://host/new.jpg".to_string(),
            }),
        );
        assert_eq!(tracker.image_url.get_untracked(), "https://host/new.jpg");
    }
}
