//! Confirmation dialog that collects an email before checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Calls `POST /checkout` with the selected plan and email, then hands the
//! browser to the returned payment URL. Failures stay in the dialog and are
//! logged to the console.

use leptos::prelude::*;

use crate::state::checkout::CheckoutState;

#[component]
pub fn CheckoutDialog(checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let on_cancel = Callback::new(move |()| checkout.update(CheckoutState::close));

    let on_confirm = Callback::new(move |()| {
        let Some(Ok(Some(request))) = checkout.try_update(CheckoutState::begin) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_checkout(&request.plan, &request.email).await;
            if let Err(err) = &result {
                log::error!("checkout for plan {} failed: {err:?}", request.plan);
            }
            let target = checkout.try_update(|c| c.resolve(result)).flatten();
            if let Some(url) = target {
                let navigated = web_sys::window().map(|window| window.location().set_href(&url));
                if !matches!(navigated, Some(Ok(()))) {
                    log::error!("redirect to checkout page failed: {navigated:?}");
                    checkout.update(CheckoutState::redirect_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            on_cancel.run(());
        }
        "Enter" => {
            ev.prevent_default();
            on_confirm.run(());
        }
        _ => {}
    };

    let plan_name = move || checkout.with(|c| c.plan.map(|p| p.name).unwrap_or_default());
    let plan_price = move || checkout.with(|c| c.plan.map(|p| p.price_label()).unwrap_or_default());
    let submitting = move || checkout.with(|c| c.submitting);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--checkout"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 class="dialog__title">"Subscribe to " {plan_name}</h2>
                <p class="dialog__subtitle">{plan_price} ", billed monthly. Your API key is emailed after payment."</p>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="you@company.com"
                        autofocus=true
                        prop:value=move || checkout.with(|c| c.email.clone())
                        on:input=move |ev| checkout.update(|c| c.email = event_target_value(&ev))
                    />
                </label>
                {move || {
                    checkout
                        .with(|c| c.error.clone())
                        .map(|msg| view! { <p class="dialog__error" role="alert">{msg}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=submitting>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(()) disabled=submitting>
                        {move || if submitting() { "Redirecting..." } else { "Continue to payment" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
