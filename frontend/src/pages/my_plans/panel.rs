use super::repository::MyPlansRepository;
use crate::{
    api::DatePlan,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    router::{paths, plan_detail_path},
    state::auth::{use_api_client, use_auth},
    utils::time::format_plan_date,
};
use leptos::*;

pub fn plan_card_title(plan: &DatePlan) -> String {
    format!("{} Date", plan.theme.to_lowercase())
}

pub fn plans_count_label(count: usize) -> String {
    let noun = if count == 1 { "Plan" } else { "Plans" };
    format!("{} {} Created", count, noun)
}

#[component]
pub fn MyPlansPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let repository = store_value(MyPlansRepository::new(use_api_client()));
    let uid = create_memo(move |_| {
        auth.with(|a| a.is_ready.then(|| a.uid().map(str::to_string)))
    });
    let plans = create_resource(
        move || uid.get(),
        move |uid| {
            let repo = repository.get_value();
            async move {
                match uid {
                    Some(Some(_)) => repo.list().await.unwrap_or_else(|err| {
                        log::error!("failed to fetch plans: {}", err);
                        Vec::new()
                    }),
                    _ => Vec::new(),
                }
            }
        },
    );

    view! {
        {move || match uid.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(None) => view! { <SignInPrompt /> }.into_view(),
            Some(Some(_)) => view! {
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || plans.get().map(|plans| view! { <PlansList plans=plans /> })}
                </Suspense>
            }.into_view(),
        }}
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="text-center p-8 max-w-lg rounded-xl bg-surface-elevated shadow-lg space-y-4">
                <h2 class="text-3xl font-bold text-brand">"Your Date Journey Awaits"</h2>
                <p class="text-lg text-fg-muted">
                    "Sign in to access your personalized date plans and create unforgettable memories together."
                </p>
                <a
                    href=paths::AUTH
                    class="inline-flex rounded-full px-8 py-3 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                >
                    "Sign In to Continue"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn PlansList(plans: Vec<DatePlan>) -> impl IntoView {
    let count = plans.len();
    let has_plans = count > 0;
    view! {
        <div class="space-y-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-brand mb-4">"Your Date Plans"</h1>
                <p class="text-lg text-fg-muted">
                    "Relive your magical moments and discover new adventures waiting to be explored."
                </p>
                <Show when=move || has_plans>
                    <span class="mt-6 inline-flex rounded-full border border-border px-4 py-2 text-sm font-medium">
                        {plans_count_label(count)}
                    </span>
                </Show>
            </div>
            {if plans.is_empty() {
                view! {
                    <EmptyState
                        title="No date plans yet"
                        description="Generate your first itinerary and it will show up here."
                        action_href=paths::APP
                        action_label="Create Your First Plan"
                    />
                }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {plans.into_iter().map(|plan| view! {
                            <a
                                href=plan_detail_path(plan.id)
                                class="block rounded-xl border border-border bg-surface-elevated p-6 text-center shadow hover:-translate-y-1 transition-transform"
                            >
                                <h3 class="text-xl font-bold capitalize">{plan_card_title(&plan)}</h3>
                                <p class="mt-2 text-sm text-fg-muted">
                                    {format!("Created on {}", format_plan_date(&plan.created_at))}
                                </p>
                            </a>
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_plan};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn signed_out_visitors_get_a_sign_in_prompt() {
        let html = render_to_string(move || {
            provide_auth(None, true);
            view! { <MyPlansPage /> }
        });
        assert!(html.contains("Sign In to Continue"));
    }

    #[test]
    fn plans_render_as_cards_linking_to_detail() {
        let html = render_to_string(move || {
            view! { <PlansList plans=vec![sample_plan(42, Some("uid-alice"))] /> }
        });
        assert!(html.contains("1 Plan Created"));
        assert!(html.contains("romantic Date"));
        assert!(html.contains("Created on Feb 14, 2025"));
        assert!(html.contains("href=\"/app/plan/42\""));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(move || view! { <PlansList plans=Vec::new() /> });
        assert!(html.contains("No date plans yet"));
        assert!(!html.contains("Created on"));
    }
}
