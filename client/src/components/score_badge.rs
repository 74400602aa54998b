//! Circular score readout colored by tier.

use leptos::prelude::*;

use crate::util::score::ScoreTier;

#[component]
pub fn ScoreBadge(score: u32, label: &'static str, #[prop(optional)] inverted: bool) -> impl IntoView {
    let tier = if inverted { ScoreTier::for_difficulty(score) } else { ScoreTier::for_score(score) };
    view! {
        <div class=format!("score-badge {}", tier.css_class()) title=tier.label()>
            <span class="score-badge__value">{score}</span>
            <span class="score-badge__label">{label}</span>
        </div>
    }
}

/// Small labelled metric tile.
#[component]
pub fn Metric(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric__value">{value}</span>
            <span class="metric__label">{label}</span>
        </div>
    }
}
