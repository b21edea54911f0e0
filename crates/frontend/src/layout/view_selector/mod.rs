//! Panel switching for the collection page.
//!
//! One panel is active at a time. The active panel decides which regions
//! (size tables, incoming tables, add form) are shown and whether the search
//! box is available; the choice survives reloads within the browser tab.

pub mod regions;
pub mod selector;
pub mod state;

pub use regions::{layout_for, PanelLayout};
pub use selector::{PanelRegion, PanelSelector};
pub use state::ViewState;
