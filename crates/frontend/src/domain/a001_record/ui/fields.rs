//! Select fields shared by the add and edit forms
use chrono::Datelike;
use contracts::domain::a001_record::DiscSize;
use leptos::prelude::*;

/// Oldest release year offered
pub const FIRST_YEAR: i32 = 1950;

/// Release years, newest first
pub fn year_options(current_year: i32) -> Vec<i32> {
    (FIRST_YEAR..=current_year.max(FIRST_YEAR)).rev().collect()
}

#[component]
pub fn YearSelect(
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let current_year = chrono::Utc::now().year();

    view! {
        <select
            name=name
            class="form-control"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {year_options(current_year)
                .into_iter()
                .map(|year| {
                    let option_value = year.to_string();
                    let selected_value = option_value.clone();
                    view! {
                        <option
                            value=option_value
                            prop:selected=move || value.with(|v| *v == selected_value)
                        >
                            {year}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn SizeSelect(
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            name=name
            class="form-control"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {DiscSize::ALL
                .into_iter()
                .map(|size| {
                    view! {
                        <option
                            value=size.form_value()
                            prop:selected=move || value.with(|v| v == size.form_value())
                        >
                            {size.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_options_newest_first() {
        let years = year_options(2026);
        assert_eq!(years.first(), Some(&2026));
        assert_eq!(years.last(), Some(&FIRST_YEAR));
        assert_eq!(years.len(), 77);
    }

    #[test]
    fn test_year_options_never_empty() {
        assert_eq!(year_options(1900), vec![FIRST_YEAR]);
    }
}
