use super::{
    form::{EditPlaceForm, DEFAULT_BOOST},
    view_model::{use_curate_view_model, CurateViewModel},
};
use crate::{
    api::CuratedPlace,
    components::{
        common::{Button, ButtonVariant},
        dialog::Modal,
        layout::LoadingSpinner,
    },
};
use leptos::{ev::SubmitEvent, *};

fn cell_or_na(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}

#[component]
pub fn AdminCuratePage() -> impl IntoView {
    let vm = use_curate_view_model();
    view! { <CuratePanel vm=vm /> }
}

#[component]
pub fn CuratePanel(vm: CurateViewModel) -> impl IntoView {
    let loading = vm.is_loading();
    let on_edit = Callback::new(move |place: CuratedPlace| vm.edit(place));

    view! {
        <div class="mx-auto max-w-6xl py-8 px-4 space-y-4">
            <h1 class="text-3xl font-bold text-fg">"Curate Places"</h1>
            <input
                type="search"
                placeholder="Search by name..."
                class="w-full max-w-sm rounded-md border border-form-control-border bg-form-control-bg px-3 py-2"
                prop:value=move || vm.search.get()
                on:input=move |ev| vm.search.set(event_target_value(&ev))
            />
            <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated shadow-sm">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="py-16"><LoadingSpinner /></div> }
                >
                    <CurationTable rows=vm.rows.into() on_edit=on_edit />
                </Show>
            </div>
            <div class="flex items-center justify-between">
                <Button
                    variant=ButtonVariant::Outline
                    disabled=Signal::derive(move || !vm.pager.get().has_previous())
                    on:click=move |_| vm.pager.update(|p| *p = p.previous())
                >
                    "Previous"
                </Button>
                <span class="text-sm text-fg-muted">{move || vm.pager.get().label()}</span>
                <Button
                    variant=ButtonVariant::Outline
                    disabled=Signal::derive(move || !vm.pager.get().has_next())
                    on:click=move |_| vm.pager.update(|p| *p = p.next())
                >
                    "Next"
                </Button>
            </div>
            <EditPlaceDialog vm=vm />
        </div>
    }
}

#[component]
pub fn CurationTable(rows: Signal<Vec<CuratedPlace>>, on_edit: Callback<CuratedPlace>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead class="bg-surface-muted text-left text-fg-muted">
                <tr>
                    <th class="px-4 py-2">"Name"</th>
                    <th class="px-4 py-2">"Category"</th>
                    <th class="px-4 py-2">"Activity Type"</th>
                    <th class="px-4 py-2">"Price Min"</th>
                    <th class="px-4 py-2">"Price Max"</th>
                    <th class="px-4 py-2">"Boost"</th>
                    <th class="px-4 py-2">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || rows.get()
                    key=|place| (place.id, place.updated_at, place.name.clone(), place.extension.as_ref().map(|e| e.boosted_rate.to_bits()))
                    children=move |place| {
                        let ext = place.extension.clone();
                        let edit_target = place.clone();
                        view! {
                            <tr>
                                <td class="px-4 py-2 font-medium">{place.name.clone()}</td>
                                <td class="px-4 py-2">{place.category.clone()}</td>
                                <td class="px-4 py-2">{cell_or_na(place.activity_type.clone())}</td>
                                <td class="px-4 py-2">
                                    {cell_or_na(ext.as_ref().and_then(|e| e.price_min).map(|v| v.to_string()))}
                                </td>
                                <td class="px-4 py-2">
                                    {cell_or_na(ext.as_ref().and_then(|e| e.price_max).map(|v| v.to_string()))}
                                </td>
                                <td class="px-4 py-2">
                                    {ext.as_ref().map(|e| e.boosted_rate).unwrap_or(DEFAULT_BOOST).to_string()}
                                </td>
                                <td class="px-4 py-2">
                                    <button
                                        type="button"
                                        class="rounded px-2 py-1 text-fg-muted hover:bg-action-ghost-bg-hover"
                                        aria-label="Edit"
                                        on:click=move |_| on_edit.call(edit_target.clone())
                                    >
                                        "Edit"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn EditPlaceDialog(vm: CurateViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.selected.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.selected
            .with(|p| format!("Edit: {}", p.as_ref().map(|p| p.name.as_str()).unwrap_or_default()))
    });
    let saving = vm.save_action.pending();
    let field = move |label: &'static str, input_type: &'static str, read: fn(&EditPlaceForm) -> String, write: fn(&mut EditPlaceForm, String)| {
        view! {
            <input
                type=input_type
                placeholder=label
                aria-label=label
                class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2"
                prop:value=move || vm.edit_form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit_form.update(|form| write(form, value));
                }
            />
        }
    };

    view! {
        <Modal
            is_open=is_open
            title=title
            on_close=Callback::new(move |_| vm.close())
        >
            <form
                class="space-y-4 pt-2"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.save();
                }
            >
                {field("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Category (e.g., ROMANTIC)", "text", |f| f.category.clone(), |f, v| f.category = v)}
                {field("Activity Type (e.g., DINNER)", "text", |f| f.activity_type.clone(), |f, v| f.activity_type = v)}
                {field("Price Min", "number", |f| f.price_min.clone(), |f, v| f.price_min = v)}
                {field("Price Max", "number", |f| f.price_max.clone(), |f, v| f.price_max = v)}
                {field("Boost Rate", "number", |f| f.boosted_rate.clone(), |f, v| f.boosted_rate = v)}
                <div class="flex justify-end">
                    <button
                        type="submit"
                        class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                        disabled=move || saving.get()
                    >
                        "Save Changes"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin_curate::form::fixtures::curated;
    use crate::state::toast::provide_toaster;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn table_shows_rows_with_na_fallbacks() {
        let html = render_to_string(move || {
            let mut bare = curated(2, "Taman Suropati");
            bare.activity_type = None;
            bare.extension = None;
            let rows = create_rw_signal(vec![curated(1, "Kopi Senja"), bare]);
            view! { <CurationTable rows=rows.into() on_edit=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("Kopi Senja"));
        assert!(html.contains("50000"));
        assert!(html.contains("1.5"));
        assert!(html.contains("Taman Suropati"));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn page_renders_pager_and_opens_seeded_dialog() {
        let html = render_to_string(move || {
            provide_toaster();
            let vm = use_curate_view_model();
            vm.edit(curated(1, "Kopi Senja"));
            view! { <CuratePanel vm=vm /> }
        });
        assert!(html.contains("Curate Places"));
        assert!(html.contains("Page 1 of 1"));
        assert!(html.contains("Edit: Kopi Senja"));
        assert!(html.contains("Boost Rate"));
    }
}
