use serde::{Deserialize, Serialize};
use std::fmt;

/// Named view of the collection page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    #[default]
    All,
    SevenInch,
    TenInch,
    TwelveInch,
    Incoming,
    AddForm,
}

impl Panel {
    /// Selector order on the page
    pub const ALL: [Panel; 6] = [
        Panel::All,
        Panel::SevenInch,
        Panel::TenInch,
        Panel::TwelveInch,
        Panel::Incoming,
        Panel::AddForm,
    ];

    /// Text of the selector control, also the persisted value
    pub fn label(&self) -> &'static str {
        match self {
            Panel::All => "All",
            Panel::SevenInch => "7 Inches",
            Panel::TenInch => "10 Inches",
            Panel::TwelveInch => "12 Inches",
            Panel::Incoming => "Incoming",
            Panel::AddForm => "+",
        }
    }

    /// Parse a selector label. Accepts the short labels of older pages ("7", "Mail").
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "All" => Some(Panel::All),
            "7 Inches" | "7" => Some(Panel::SevenInch),
            "10 Inches" | "10" => Some(Panel::TenInch),
            "12 Inches" | "12" => Some(Panel::TwelveInch),
            "Incoming" | "Mail" => Some(Panel::Incoming),
            "+" | "Add" => Some(Panel::AddForm),
            _ => None,
        }
    }

    /// Panels only the collection owner can select
    pub fn owner_only(&self) -> bool {
        matches!(self, Panel::AddForm)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
