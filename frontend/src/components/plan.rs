//! Page shown after the upload redirects.

use leptos::*;
use leptos_router::A;

use crate::UploadedPlan;

/// Rough decoded size of a base64 data URL, in bytes.
fn decoded_size(data_url: &str) -> usize {
    let encoded = data_url
        .split_once(',')
        .map_or("", |(_, data)| data)
        .trim_end_matches('=');
    encoded.len() * 3 / 4
}

#[component]
pub fn PlanPreview() -> impl IntoView {
    let plan = use_context::<UploadedPlan>().unwrap_or_else(UploadedPlan::new);

    view! {
        <div class="container">
            {move || match plan.0.get() {
                Some(data_url) => {
                    let size_kb = decoded_size(&data_url) / 1024;
                    view! {
                        <div class="plan-preview">
                            <img src=data_url alt="Uploaded floor plan"/>
                            <p class="help">{format!("{} KB", size_kb)}</p>
                            <A href="/" class="upload-button">"Upload another plan"</A>
                        </div>
                    }
                    .into_view()
                }
                None => view! {
                    <div class="plan-preview empty">
                        <p>"No floor plan uploaded yet."</p>
                        <A href="/" class="upload-button">"Go to upload"</A>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_size() {
        assert_eq!(decoded_size("data:image/png;base64,iVBORw=="), 4);
        assert_eq!(decoded_size("data:image/png;base64,aGVsbG8h"), 6);
        assert_eq!(decoded_size("data:image/png;base64,"), 0);
        assert_eq!(decoded_size("garbage"), 0);
    }
}
