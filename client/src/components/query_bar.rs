//! Single-line query input with a submit button.
//!
//! Both the button and the Enter key fire `on_submit`. The button is
//! disabled while the owning panel is busy; Enter still fires so a new query
//! can supersede a slow one.

use leptos::prelude::*;

#[component]
pub fn QueryBar(
    value: RwSignal<String>,
    placeholder: &'static str,
    button_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="query-bar">
            <input
                class="query-bar__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            {children.map(|c| c())}
            <button
                class="btn btn--primary query-bar__submit"
                on:click=move |_| on_submit.run(())
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Working..." } else { button_label }}
            </button>
        </div>
    }
}
