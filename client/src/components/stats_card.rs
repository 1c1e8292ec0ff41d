//! Metric card used on the dashboard.

#[cfg(test)]
#[path = "stats_card_test.rs"]
mod stats_card_test;

use leptos::prelude::*;

use crate::content::dashboard::Tone;

/// Class for a signed change value: increases are green, anything else red.
pub fn change_class(change: &str) -> &'static str {
    if change.starts_with('+') {
        "stats-card__change stats-card__change--up"
    } else {
        "stats-card__change stats-card__change--down"
    }
}

#[component]
pub fn StatsCard(
    title: &'static str,
    value: &'static str,
    change: &'static str,
    icon: &'static str,
    tone: Tone,
) -> impl IntoView {
    view! {
        <div class="stats-card card">
            <div class="stats-card__body">
                <p class="stats-card__title">{title}</p>
                <p class="stats-card__value">{value}</p>
                <p class=change_class(change)>{format!("{change} from last month")}</p>
            </div>
            <div class=format!("stats-card__icon {}", tone.class()) aria-hidden="true">{icon}</div>
        </div>
    }
}
