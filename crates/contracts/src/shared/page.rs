use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::media::MediaSettings;
use crate::domain::a001_record::RecordRow;

/// Id of the `<script type="application/json">` element the server embeds
pub const BOOTSTRAP_ELEMENT_ID: &str = "shelf-bootstrap";

/// Page data rendered by the server alongside the collection markup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageBootstrap {
    pub username: String,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub records: Vec<RecordRow>,
    #[serde(default)]
    pub media: Option<MediaSettings>,
}

impl PageBootstrap {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("Failed to parse page bootstrap")
    }

    pub fn media_settings(&self) -> MediaSettings {
        self.media.clone().unwrap_or_default()
    }

    /// Owner-only CSV export link
    pub fn download_href(&self) -> String {
        format!("/download/{}", self.username)
    }
}
