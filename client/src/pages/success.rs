//! Post-payment landing page.

use leptos::prelude::*;

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="success-page">
            <h1>"Welcome to SEO Dashboard!"</h1>
            <p>"Your subscription is active. Check your email for your API key."</p>
            <p>
                <a class="btn btn--primary" href="/login">"Go to Dashboard →"</a>
            </p>
        </div>
    }
}
