//! Pricing card for one subscription plan.

use leptos::prelude::*;
use reports::Plan;

#[component]
pub fn PlanCard(plan: &'static Plan, on_select: Callback<&'static str>) -> impl IntoView {
    let reports_line = if plan.is_unlimited() {
        "Unlimited reports".to_owned()
    } else {
        format!("{} reports / month", plan.reports_per_month)
    };

    let (card_class, button_class) = if plan.featured {
        ("plan-card plan-card--featured", "btn btn--primary plan-card__select")
    } else {
        ("plan-card", "btn plan-card__select")
    };

    view! {
        <article class=card_class>
            <Show when=move || plan.featured>
                <span class="plan-card__ribbon">"Most popular"</span>
            </Show>
            <h3 class="plan-card__name">{plan.name}</h3>
            <p class="plan-card__price">{plan.price_label()}</p>
            <p class="plan-card__quota">{reports_line}</p>
            <ul class="plan-card__features">
                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
            </ul>
            <button class=button_class on:click=move |_| on_select.run(plan.id)>
                {format!("Choose {}", plan.name)}
            </button>
        </article>
    }
}
