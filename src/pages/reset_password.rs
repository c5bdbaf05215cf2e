//! Password reset page.

use leptos::prelude::*;

use crate::router::RouterConfig;

/// Password reset form shell. The reset flow itself is handled by the
/// backend's mail link; this page only collects the address.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let config = RouterConfig::detect();
    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        sent.set(true);
    };

    view! {
        <div class="reset-page">
            <h1>"Reset password"</h1>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p>"If that address exists, a reset link is on its way."</p> }
            >
                <form class="reset-page__form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Send reset link"</button>
                </form>
            </Show>
            <p><a href=config.join("/login")>"Back to login"</a></p>
        </div>
    }
}
