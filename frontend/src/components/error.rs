use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-semibold">
                    {move || error.get().map(|e| e.message_or_default().to_string()).unwrap_or_default()}
                </div>
                {move || error.get().and_then(|e| validation_messages(&e)).map(|messages| view! {
                    <ul class="list-disc list-inside text-sm">
                        {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                    </ul>
                })}
            </div>
        </Show>
    }
}

/// Field messages attached to a validation error, if any.
fn validation_messages(error: &ApiError) -> Option<Vec<String>> {
    if error.code != "VALIDATION_ERROR" {
        return None;
    }
    let messages: Vec<String> = error
        .details
        .as_ref()?
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    (!messages.is_empty()).then_some(messages)
}
