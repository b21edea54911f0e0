use super::regions::layout_for;
use crate::domain::a001_record::filter::TableFilter;
use crate::shared::dom::{has_validation_errors, session_storage};
use contracts::domain::a001_record::Panel;
use leptos::prelude::*;

/// Session-storage key holding the label of the last selected panel
pub const STORAGE_KEY: &str = "vinyl_shelf.active_panel";

fn load_persisted() -> Option<String> {
    session_storage()?.get_item(STORAGE_KEY).ok().flatten()
}

fn save_persisted(panel: Panel) {
    let Some(storage) = session_storage() else { return };
    let _ = storage.set_item(STORAGE_KEY, panel.label());
}

/// Panel to open on page load.
///
/// A page carrying validation errors opens the add form so the errors are visible.
/// Otherwise the persisted label is used, falling back to `All` when it is missing,
/// unknown, or names a panel the visitor may not open.
pub fn initial_panel(validation_errors: bool, persisted: Option<&str>, is_owner: bool) -> Panel {
    if validation_errors && is_owner {
        return Panel::AddForm;
    }
    match persisted.and_then(Panel::from_label) {
        Some(panel) if is_owner || !panel.owner_only() => panel,
        _ => Panel::All,
    }
}

/// Active panel of the page plus the filter it resets on every switch
#[derive(Clone, Copy)]
pub struct ViewState {
    pub active: RwSignal<Panel>,
    filter: TableFilter,
}

impl ViewState {
    pub fn new(initial: Panel, filter: TableFilter) -> Self {
        Self {
            active: RwSignal::new(initial),
            filter,
        }
    }

    /// Restore the panel from the tab session (or the validation-error override)
    pub fn restore(filter: TableFilter, is_owner: bool) -> Self {
        let errors = has_validation_errors();
        let persisted = load_persisted();
        let initial = initial_panel(errors, persisted.as_deref(), is_owner);
        log::debug!(
            "initial panel {} (persisted: {:?}, validation errors: {})",
            initial,
            persisted,
            errors
        );
        Self::new(initial, filter)
    }

    /// Switch panels: persist the choice and reset the search
    pub fn select(&self, panel: Panel) {
        log::debug!("panel {} -> {}", self.active.get_untracked(), panel);
        self.active.set(panel);
        save_persisted(panel);
        self.filter.clear();
    }

    /// Whether the region owned by `region` is shown
    pub fn region_visible(&self, region: Panel) -> bool {
        layout_for(self.active.get()).shows(region)
    }

    pub fn visible_regions(&self) -> &'static [Panel] {
        layout_for(self.active.get()).regions
    }

    pub fn search_visible(&self) -> bool {
        layout_for(self.active.get()).search_visible
    }
}
