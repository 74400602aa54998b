//! Pricing page: plan cards wired to the checkout dialog.

use leptos::prelude::*;
use reports::PLANS;

use crate::components::checkout_dialog::CheckoutDialog;
use crate::components::plan_card::PlanCard;
use crate::state::checkout::CheckoutState;
use crate::state::session::SessionState;

#[component]
pub fn PricingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let checkout = RwSignal::new(CheckoutState::default());

    let on_select = Callback::new(move |plan_id: &'static str| {
        checkout.update(|c| {
            c.open(plan_id);
        });
    });

    let back_link = move || {
        if session.with(SessionState::is_authenticated) {
            ("/", "Back to dashboard")
        } else {
            ("/login", "Sign in")
        }
    };

    view! {
        <div class="pricing-page">
            <header class="pricing-page__header">
                <a class="toolbar__brand" href="/">"SEO Dashboard"</a>
                <span class="toolbar__spacer"></span>
                <a class="btn" href=move || back_link().0>{move || back_link().1}</a>
            </header>
            <section class="pricing-page__hero">
                <h1>"Simple, transparent pricing"</h1>
                <p>"Domain overviews, keyword research, and site audits. Cancel anytime."</p>
            </section>
            <section class="pricing-page__plans">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=plan on_select=on_select/> }).collect::<Vec<_>>()}
            </section>
            <Show when=move || checkout.with(CheckoutState::is_open)>
                <CheckoutDialog checkout=checkout/>
            </Show>
        </div>
    }
}
