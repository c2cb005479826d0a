use super::repository::PlanRepository;
use crate::{
    api::DatePlan,
    components::{
        common::{Button, ButtonVariant},
        layout::LoadingSpinner,
        timeline::TimelineItem,
    },
    config,
    router::{paths, plan_detail_path},
    state::{
        auth::{use_api_client, use_auth},
        toast::use_toaster,
    },
    utils::{
        clipboard::copy_text,
        download::{plan_pdf_filename, trigger_bytes_download, PDF_MIME},
        navigation::current_origin,
    },
};
use leptos::*;
use leptos_router::use_params_map;

pub fn itinerary_title(plan: &DatePlan, uid: Option<&str>) -> &'static str {
    if plan.is_owned_by(uid) {
        "Your Date Itinerary"
    } else {
        "A Date Itinerary For You"
    }
}

pub fn create_label(plan: &DatePlan, uid: Option<&str>) -> &'static str {
    if plan.is_owned_by(uid) {
        "Create New Plan"
    } else {
        "Create Your Own Plan"
    }
}

/// Absolute link when the origin is known, the app path otherwise.
pub fn share_url(origin: Option<&str>, plan_id: i64) -> String {
    let path = plan_detail_path(plan_id);
    match origin {
        Some(origin) => format!("{}{}", origin.trim_end_matches('/'), path),
        None => path,
    }
}

#[component]
pub fn PlanPage() -> impl IntoView {
    let params = use_params_map();
    let repository = store_value(PlanRepository::new(use_api_client()));
    let plan_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let plan = create_resource(plan_id, move |id| {
        let repo = repository.get_value();
        async move { repo.load(&id).await }
    });

    view! {
        <div class="flex justify-center py-8">
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || plan.get().map(|result| match result {
                    Ok(plan) => view! { <PlanDisplay plan=plan repository=repository.get_value() /> }.into_view(),
                    Err(err) => {
                        log::warn!("could not load plan: {}", err);
                        view! { <PlanNotFound /> }.into_view()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
pub fn PlanNotFound() -> impl IntoView {
    view! {
        <div class="text-center space-y-3">
            <h2 class="text-2xl font-bold text-fg">"Plan Not Found"</h2>
            <p class="text-fg-muted">"This date plan does not exist or is no longer available."</p>
            <a href=paths::APP class="text-action-primary-bg hover:underline">"Create a new plan"</a>
        </div>
    }
}

#[component]
pub fn PlanDisplay(plan: DatePlan, repository: PlanRepository) -> impl IntoView {
    let (auth, _) = use_auth();
    let toaster = use_toaster();
    let plan_id = plan.id;
    let owner = plan.clone();
    let title = create_memo(move |_| auth.with(|a| itinerary_title(&owner, a.uid())));
    let owner = plan.clone();
    let create_text = create_memo(move |_| auth.with(|a| create_label(&owner, a.uid())));
    let maps_api_key = config::maps_api_key();
    let places = plan.ordered_places();

    let share_action = create_action(move |_: &()| async move {
        let url = share_url(current_origin().as_deref(), plan_id);
        match copy_text(&url).await {
            Ok(()) => toaster.success("Link copied to clipboard!"),
            Err(err) => {
                log::warn!("clipboard write failed: {}", err);
                toaster.error_with("Could not copy the link.", &url);
            }
        }
    });

    let repository = store_value(repository);
    let download_action = create_action(move |_: &()| {
        let repo = repository.get_value();
        async move {
            match repo.pdf(plan_id).await {
                Ok(bytes) => {
                    if let Err(err) = trigger_bytes_download(&plan_pdf_filename(plan_id), PDF_MIME, &bytes) {
                        toaster.error_with("Failed to download PDF.", &err);
                    }
                }
                Err(err) => toaster.error_with("Failed to download PDF.", err.message_or_default()),
            }
        }
    });
    let downloading = download_action.pending();

    view! {
        <div class="w-full max-w-3xl space-y-6">
            <h2 class="text-3xl sm:text-4xl font-bold text-center text-brand">{move || title.get()}</h2>
            <ol class="space-y-8 py-4">
                {places.into_iter().enumerate().map(|(index, place)| view! {
                    <TimelineItem place=place index=index maps_api_key=maps_api_key.clone() />
                }).collect_view()}
            </ol>
            <div class="flex flex-col sm:flex-row gap-3">
                <Button class="w-full sm:w-1/3" on:click=move |_| share_action.dispatch(())>
                    "Share This Plan"
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    class="w-full sm:w-1/3"
                    loading=downloading
                    on:click=move |_| download_action.dispatch(())
                >
                    "Download PDF"
                </Button>
                <a
                    href=paths::APP
                    class="w-full sm:w-1/3 inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border-strong bg-surface-elevated text-fg hover:bg-surface-muted"
                >
                    {move || create_text.get()}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_plan;

    #[test]
    fn title_depends_on_ownership() {
        let plan = sample_plan(42, Some("uid-alice"));
        assert_eq!(itinerary_title(&plan, Some("uid-alice")), "Your Date Itinerary");
        assert_eq!(itinerary_title(&plan, Some("uid-bob")), "A Date Itinerary For You");
        assert_eq!(itinerary_title(&plan, None), "A Date Itinerary For You");
        let anonymous = sample_plan(43, None);
        assert_eq!(itinerary_title(&anonymous, Some("uid-alice")), "A Date Itinerary For You");
        assert_eq!(create_label(&plan, Some("uid-alice")), "Create New Plan");
    }

    #[test]
    fn share_url_is_absolute_when_origin_known() {
        assert_eq!(
            share_url(Some("https://kencankuy.id/"), 42),
            "https://kencankuy.id/app/plan/42"
        );
        assert_eq!(share_url(None, 42), "/app/plan/42");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{alice, provide_auth, sample_plan};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn owner_sees_own_itinerary_in_step_order() {
        let html = render_to_string(move || {
            provide_auth(Some(alice()), true);
            let plan = sample_plan(42, Some("uid-alice"));
            view! { <PlanDisplay plan=plan repository=PlanRepository::new(ApiClient::new()) /> }
        });
        assert!(html.contains("Your Date Itinerary"));
        assert!(html.contains("Create New Plan"));
        let first = html.find("Taman Menteng").unwrap();
        let second = html.find("Kopi Senja").unwrap();
        assert!(first < second);
        assert!(html.contains("Download PDF"));
    }

    #[test]
    fn visitor_sees_shared_itinerary() {
        let html = render_to_string(move || {
            provide_auth(None, true);
            let plan = sample_plan(42, Some("uid-alice"));
            view! { <PlanDisplay plan=plan repository=PlanRepository::new(ApiClient::new()) /> }
        });
        assert!(html.contains("A Date Itinerary For You"));
        assert!(html.contains("Create Your Own Plan"));
    }

    #[test]
    fn not_found_panel_renders() {
        let html = render_to_string(|| view! { <PlanNotFound /> });
        assert!(html.contains("Plan Not Found"));
    }
}
