use crate::{
    api::DatePlace,
    utils::maps::{open_in_maps_url, static_map_url},
};
use leptos::*;

/// Photo for a stop: the cached photo when the API has one, otherwise a
/// static map centred on the place.
pub fn place_image_url(place: &DatePlace, maps_api_key: &str) -> String {
    place
        .cached_photo_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| static_map_url(place.latitude, place.longitude, maps_api_key))
}

#[component]
pub fn TimelineItem(
    place: DatePlace,
    index: usize,
    #[prop(into)] maps_api_key: String,
) -> impl IntoView {
    let image = place_image_url(&place, &maps_api_key);
    let maps_link = open_in_maps_url(&place.name, &place.google_place_id);
    let row = if index % 2 == 0 {
        "md:flex-row"
    } else {
        "md:flex-row-reverse"
    };

    view! {
        <li class=format!("relative flex flex-col gap-4 {}", row)>
            <div class="md:w-1/2">
                <img
                    src=image
                    alt=place.name.clone()
                    class="h-48 w-full rounded-lg object-cover shadow"
                    loading="lazy"
                />
            </div>
            <div class="md:w-1/2 rounded-lg border border-border bg-surface-elevated p-4 shadow-sm">
                <span class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-sm font-bold">
                    {index + 1}
                </span>
                <h3 class="mt-2 text-lg font-semibold text-fg">{place.name.clone()}</h3>
                <p class="text-sm text-fg-muted">{place.address.clone()}</p>
                <a
                    href=maps_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-3 inline-flex text-sm font-medium text-action-primary-bg hover:underline"
                >
                    "Open in Maps"
                </a>
            </div>
        </li>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::place;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn timeline_item_alternates_and_links_to_maps() {
        let html = render_to_string(move || {
            view! {
                <ol>
                    <TimelineItem place=place(1, "Taman Menteng") index=0 maps_api_key="KEY" />
                    <TimelineItem place=place(2, "Kopi Senja") index=1 maps_api_key="KEY" />
                </ol>
            }
        });
        assert!(html.contains("Taman Menteng"));
        assert!(html.contains("md:flex-row-reverse"));
        assert!(html.contains("query=Kopi%20Senja&amp;query_place_id=g-2")
            || html.contains("query=Kopi%20Senja&query_place_id=g-2"));
    }
}
