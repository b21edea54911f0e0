use super::state::ViewState;
use contracts::domain::a001_record::Panel;
use leptos::prelude::*;

/// CSS class of a selector control; exactly one control is active
pub fn selector_class(panel: Panel, active: Panel) -> &'static str {
    if panel == active {
        "active"
    } else {
        ""
    }
}

/// Row of panel switches ("All", "7 Inches", ..., "+")
#[component]
pub fn PanelSelector(state: ViewState, is_owner: bool) -> impl IntoView {
    let panels: Vec<Panel> = Panel::ALL
        .into_iter()
        .filter(|panel| is_owner || !panel.owner_only())
        .collect();

    view! {
        <ul id="sizes" class="nav nav-pills">
            {panels
                .into_iter()
                .map(|panel| {
                    view! {
                        <li class=move || selector_class(panel, state.active.get())>
                            <a
                                href="#"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    state.select(panel);
                                }
                            >
                                {panel.label()}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Region owned by a panel; hidden unless the active panel shows it
#[component]
pub fn PanelRegion(
    state: ViewState,
    region: Panel,
    #[prop(into)] dom_id: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=dom_id
            class="panel panel-default"
            style:display=move || if state.region_visible(region) { "" } else { "none" }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_selector_active() {
        for active in Panel::ALL {
            let active_count = Panel::ALL
                .into_iter()
                .filter(|panel| selector_class(*panel, active) == "active")
                .count();
            assert_eq!(active_count, 1);
            assert_eq!(selector_class(active, active), "active");
        }
    }
}
