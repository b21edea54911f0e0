use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::panel::Panel;

// ============================================================================
// Disc size
// ============================================================================

/// Physical disc size of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiscSize {
    Seven,
    Ten,
    Twelve,
}

impl DiscSize {
    pub const ALL: [DiscSize; 3] = [DiscSize::Seven, DiscSize::Ten, DiscSize::Twelve];

    pub fn inches(&self) -> u8 {
        match self {
            DiscSize::Seven => 7,
            DiscSize::Ten => 10,
            DiscSize::Twelve => 12,
        }
    }

    /// Option value of the server-side size select
    pub fn form_value(&self) -> &'static str {
        match self {
            DiscSize::Seven => "1",
            DiscSize::Ten => "2",
            DiscSize::Twelve => "3",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(DiscSize::Seven),
            "2" => Some(DiscSize::Ten),
            "3" => Some(DiscSize::Twelve),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscSize::Seven => "7\"",
            DiscSize::Ten => "10\"",
            DiscSize::Twelve => "12\"",
        }
    }

    /// Word used in table container ids ("seven-inches", ...)
    pub fn slug(&self) -> &'static str {
        match self {
            DiscSize::Seven => "seven",
            DiscSize::Ten => "ten",
            DiscSize::Twelve => "twelve",
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            DiscSize::Seven => Panel::SevenInch,
            DiscSize::Ten => Panel::TenInch,
            DiscSize::Twelve => Panel::TwelveInch,
        }
    }
}

impl TryFrom<u8> for DiscSize {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(DiscSize::Seven),
            10 => Ok(DiscSize::Ten),
            12 => Ok(DiscSize::Twelve),
            other => Err(format!("Unsupported disc size: {}", other)),
        }
    }
}

impl From<DiscSize> for u8 {
    fn from(size: DiscSize) -> Self {
        size.inches()
    }
}

impl fmt::Display for DiscSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Table kind
// ============================================================================

/// Identity of one rendered table: a size, either in the collection or in the mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableKind {
    pub size: DiscSize,
    pub incoming: bool,
}

impl TableKind {
    pub fn new(size: DiscSize, incoming: bool) -> Self {
        Self { size, incoming }
    }

    /// Container id the table is rendered under
    pub fn container_id(&self) -> String {
        if self.incoming {
            format!("{}-inches-mail", self.size.slug())
        } else {
            format!("{}-inches", self.size.slug())
        }
    }

    /// Infer the table from its container id by substring match.
    ///
    /// "seven" is checked before "ten" and "twelve"; ids without a size word yield `None`.
    pub fn from_container_id(id: &str) -> Option<Self> {
        let id = id.to_ascii_lowercase();
        let incoming = id.contains("mail");
        let size = if id.contains("seven") {
            DiscSize::Seven
        } else if id.contains("ten") {
            DiscSize::Ten
        } else if id.contains("twelve") {
            DiscSize::Twelve
        } else {
            return None;
        };
        Some(Self { size, incoming })
    }
}

// ============================================================================
// Row
// ============================================================================

/// One collection entry as rendered in a table row.
///
/// Fields are bound by name; anything the server leaves out deserializes to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordRow {
    pub id: String,
    pub artist: String,
    pub title: String,
    pub color: String,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<i32>,
    pub notes: String,
    pub timestamp: String,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<DiscSize>,
    pub incoming: bool,
    pub image_url: Option<String>,
}

impl RecordRow {
    pub fn year_text(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Table this row is rendered in; rows without a size are not rendered
    pub fn table(&self) -> Option<TableKind> {
        self.size.map(|size| TableKind::new(size, self.incoming))
    }

    /// Panel whose region contains this row
    pub fn panel(&self) -> Option<Panel> {
        if self.incoming {
            return Some(Panel::Incoming);
        }
        self.size.map(|s| s.panel())
    }

    /// Image URL if one is attached and non-blank
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Field value that does not fit its type is treated as missing
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Relative link of the delete affordance for a record
pub fn delete_href(record_id: &str) -> String {
    format!("delete-record/{}", record_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_size_json_is_inches() {
        let size: DiscSize = serde_json::from_str("10").unwrap();
        assert_eq!(size, DiscSize::Ten);
        assert_eq!(serde_json::to_string(&DiscSize::Twelve).unwrap(), "12");
        assert!(serde_json::from_str::<DiscSize>("8").is_err());
    }

    #[test]
    fn test_disc_size_form_value() {
        for size in DiscSize::ALL {
            assert_eq!(DiscSize::from_form_value(size.form_value()), Some(size));
        }
        assert_eq!(DiscSize::from_form_value("4"), None);
    }

    #[test]
    fn test_table_kind_from_container_id() {
        assert_eq!(
            TableKind::from_container_id("seven-inches"),
            Some(TableKind::new(DiscSize::Seven, false))
        );
        assert_eq!(
            TableKind::from_container_id("twelve-inches-mail"),
            Some(TableKind::new(DiscSize::Twelve, true))
        );
        assert_eq!(
            TableKind::from_container_id("panel-ten"),
            Some(TableKind::new(DiscSize::Ten, false))
        );
        assert_eq!(TableKind::from_container_id("mail"), None);
    }

    #[test]
    fn test_container_id_is_inferable() {
        for size in DiscSize::ALL {
            for incoming in [false, true] {
                let kind = TableKind::new(size, incoming);
                assert_eq!(TableKind::from_container_id(&kind.container_id()), Some(kind));
            }
        }
    }

    #[test]
    fn test_row_defaults_for_missing_fields() {
        let row: RecordRow = serde_json::from_str(r#"{"id": "42", "artist": "Artist A"}"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.title, "");
        assert_eq!(row.year, None);
        assert_eq!(row.size, None);
        assert_eq!(row.panel(), None);
        assert_eq!(row.image(), None);
    }

    #[test]
    fn test_row_with_unreadable_size_or_year_keeps_other_fields() {
        let row: RecordRow = serde_json::from_str(
            r#"{"id": "9", "artist": "Can", "year": "n/a", "size": "12", "color": "Red"}"#,
        )
        .unwrap();
        assert_eq!(row.id, "9");
        assert_eq!(row.color, "Red");
        assert_eq!(row.year, None);
        assert_eq!(row.size, None);

        let row: RecordRow = serde_json::from_str(r#"{"id": "9", "size": 8, "year": null}"#).unwrap();
        assert_eq!(row.size, None);
        assert_eq!(row.year, None);
    }

    #[test]
    fn test_row_panel() {
        let mut row = RecordRow {
            size: Some(DiscSize::Seven),
            ..Default::default()
        };
        assert_eq!(row.panel(), Some(Panel::SevenInch));
        row.incoming = true;
        assert_eq!(row.panel(), Some(Panel::Incoming));
        assert_eq!(row.table(), Some(TableKind::new(DiscSize::Seven, true)));
    }

    #[test]
    fn test_blank_image_is_absent() {
        let row = RecordRow {
            image_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(row.image(), None);
    }

    #[test]
    fn test_delete_href() {
        assert_eq!(delete_href("42"), "delete-record/42");
    }
}
