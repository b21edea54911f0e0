use contracts::domain::a001_record::Panel;

/// What a panel shows when it is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel: Panel,
    /// Regions shown, each identified by the panel that owns it
    pub regions: &'static [Panel],
    pub search_visible: bool,
}

impl PanelLayout {
    pub fn shows(&self, region: Panel) -> bool {
        self.regions.contains(&region)
    }
}

const SIZE_REGIONS: &[Panel] = &[Panel::SevenInch, Panel::TenInch, Panel::TwelveInch];

pub const PANEL_LAYOUTS: [PanelLayout; 6] = [
    PanelLayout {
        panel: Panel::All,
        regions: SIZE_REGIONS,
        search_visible: true,
    },
    PanelLayout {
        panel: Panel::SevenInch,
        regions: &[Panel::SevenInch],
        search_visible: true,
    },
    PanelLayout {
        panel: Panel::TenInch,
        regions: &[Panel::TenInch],
        search_visible: true,
    },
    PanelLayout {
        panel: Panel::TwelveInch,
        regions: &[Panel::TwelveInch],
        search_visible: true,
    },
    PanelLayout {
        panel: Panel::Incoming,
        regions: &[Panel::Incoming],
        search_visible: false,
    },
    PanelLayout {
        panel: Panel::AddForm,
        regions: &[Panel::AddForm],
        search_visible: true,
    },
];

pub fn layout_for(panel: Panel) -> &'static PanelLayout {
    PANEL_LAYOUTS
        .iter()
        .find(|layout| layout.panel == panel)
        .unwrap_or(&PANEL_LAYOUTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_has_a_layout() {
        for panel in Panel::ALL {
            assert_eq!(layout_for(panel).panel, panel);
        }
    }

    #[test]
    fn test_all_shows_the_three_sizes() {
        let all = layout_for(Panel::All);
        assert_eq!(all.regions.len(), 3);
        assert!(all.shows(Panel::SevenInch) && all.shows(Panel::TenInch) && all.shows(Panel::TwelveInch));
        assert!(!all.shows(Panel::Incoming));
        assert!(!all.shows(Panel::AddForm));
    }

    #[test]
    fn test_single_panels_show_only_their_region() {
        for panel in Panel::ALL.into_iter().filter(|p| *p != Panel::All) {
            assert_eq!(layout_for(panel).regions, &[panel]);
        }
    }

    #[test]
    fn test_search_hidden_only_for_incoming() {
        for panel in Panel::ALL {
            assert_eq!(layout_for(panel).search_visible, panel != Panel::Incoming);
        }
    }
}
