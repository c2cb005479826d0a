use super::form::parse_manual_location;
use crate::{
    api::{ApiError, PickedLocation},
    utils::maps::DEFAULT_CENTER,
};
use leptos::*;

fn manual_address(lat: f64, lng: f64) -> String {
    format!("{:.5}, {:.5}", lat, lng)
}

/// Address search plus manual coordinates. Calls `on_select` with a complete
/// location only.
#[component]
pub fn LocationPicker(
    search_action: Action<String, Result<Vec<PickedLocation>, ApiError>>,
    on_select: Callback<PickedLocation>,
) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let manual_lat = create_rw_signal(DEFAULT_CENTER.lat.to_string());
    let manual_lng = create_rw_signal(DEFAULT_CENTER.lng.to_string());
    let manual_error = create_rw_signal(None::<String>);
    let searching = search_action.pending();
    let results = search_action.value();

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        if text.trim().is_empty() || searching.get_untracked() {
            return;
        }
        search_action.dispatch(text);
    };

    let on_manual = move |_| {
        match parse_manual_location(&manual_lat.get_untracked(), &manual_lng.get_untracked()) {
            Ok(coordinates) => {
                manual_error.set(None);
                on_select.call(PickedLocation {
                    coordinates,
                    address: manual_address(coordinates.lat, coordinates.lng),
                });
            }
            Err(message) => manual_error.set(Some(message)),
        }
    };

    view! {
        <div class="w-full space-y-6">
            <form class="space-y-2" on:submit=on_search>
                <label class="block text-sm font-medium text-fg" for="location-search">
                    "Search an address"
                </label>
                <div class="flex gap-2">
                    <input
                        id="location-search"
                        type="text"
                        class="flex-1 rounded-md border border-border-strong bg-surface-elevated px-3 py-2 text-sm"
                        placeholder="e.g., Monas, Jakarta"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || searching.get()
                    >
                        {move || if searching.get() { "Searching..." } else { "Search" }}
                    </button>
                </div>
            </form>
            {move || results.get().map(|result| match result {
                Ok(found) if found.is_empty() => view! {
                    <p class="text-sm text-fg-muted">"No matching places found."</p>
                }.into_view(),
                Ok(found) => view! {
                    <ul class="divide-y divide-border rounded-md border border-border bg-surface-elevated">
                        {found.into_iter().map(|picked| {
                            let label = picked.address.clone();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="w-full text-left px-3 py-2 text-sm hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| on_select.call(picked.clone())
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view(),
                Err(err) => view! {
                    <p class="text-sm text-status-error-text">{err.error}</p>
                }.into_view(),
            })}
            <div class="space-y-2 rounded-md border border-border p-3">
                <p class="text-sm font-medium text-fg">"Or enter coordinates"</p>
                <div class="grid grid-cols-2 gap-2">
                    <input
                        type="text"
                        inputmode="decimal"
                        aria-label="Latitude"
                        class="rounded-md border border-border-strong bg-surface-elevated px-3 py-2 text-sm"
                        prop:value=move || manual_lat.get()
                        on:input=move |ev| manual_lat.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        inputmode="decimal"
                        aria-label="Longitude"
                        class="rounded-md border border-border-strong bg-surface-elevated px-3 py-2 text-sm"
                        prop:value=move || manual_lng.get()
                        on:input=move |ev| manual_lng.set(event_target_value(&ev))
                    />
                </div>
                {move || manual_error.get().map(|message| view! {
                    <p class="text-sm text-status-error-text">{message}</p>
                })}
                <button
                    type="button"
                    class="w-full rounded-md px-4 py-2 text-sm font-semibold border border-border-strong hover:bg-surface-muted"
                    on:click=on_manual
                >
                    "Use these coordinates"
                </button>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn picker_renders_search_and_jakarta_defaults() {
        let html = render_to_string(move || {
            let search_action = create_action(|_: &String| async { Ok::<_, ApiError>(Vec::<PickedLocation>::new()) });
            view! {
                <LocationPicker search_action=search_action on_select=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("Search an address"));
        assert!(html.contains("Use these coordinates"));
    }
}
