use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

#[component]
pub fn Header(is_signed_in: RwSignal<bool>) -> impl IntoView {
    let on_auth_click = move |_| {
        let signed_in = !is_signed_in.get_untracked();
        if signed_in {
            log::info!("🔑 Signed in");
        } else {
            log::info!("👋 Signed out");
        }
        is_signed_in.set(signed_in);
    };

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <div class="header-right">
                <div
                    class="auth-status"
                    class:connected=move || is_signed_in.get()
                    on:click=on_auth_click
                    style="cursor: pointer;"
                >
                    <span class="auth-dot" class:connected=move || is_signed_in.get()></span>
                    <span>
                        {move || if is_signed_in.get() { "Sign out" } else { "Sign in" }}
                    </span>
                </div>
            </div>
        </header>
    }
}
