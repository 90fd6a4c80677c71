//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload your floor plan"</h1>
            <p class="subtitle">
                "Drop a JPG or PNG of your floor plan. "
                "We analyze it and take you straight to the result."
            </p>
        </div>
    }
}
