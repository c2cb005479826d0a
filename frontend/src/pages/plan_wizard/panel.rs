use super::{
    location_picker::LocationPicker,
    machine::{WizardStage, WizardState},
    view_model::use_plan_wizard_view_model,
};
use crate::{
    api::{PickedLocation, PlaceCategory},
    components::layout::LoadingSpinner,
    router::{paths, plan_detail_path},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Locating,
    Picker,
    Options,
    Done,
}

fn screen_for(stage: WizardStage) -> Screen {
    match stage {
        WizardStage::Idle => Screen::Start,
        WizardStage::FetchingLocation => Screen::Locating,
        WizardStage::MapPicker => Screen::Picker,
        WizardStage::Options | WizardStage::FetchingPlan => Screen::Options,
        WizardStage::Results => Screen::Done,
    }
}

#[component]
pub fn PlanWizardPage() -> impl IntoView {
    let vm = use_plan_wizard_view_model();
    let state = vm.state;
    let screen = create_memo(move |_| screen_for(state.with(|s| s.stage)));
    let on_submit = Callback::new(move |_| vm.submit_action.dispatch(()));
    let on_select = Callback::new(move |picked: PickedLocation| vm.pick_location(picked));
    let on_change_location = Callback::new(move |_| vm.change_location());

    view! {
        <section class="min-h-[70vh] w-full flex items-center justify-center">
            {move || match screen.get() {
                Screen::Start => view! {
                    <div class="text-center flex flex-col items-center">
                        <h1 class="text-4xl sm:text-5xl font-bold text-brand mb-4">"KencanKuy"</h1>
                        <p class="text-lg text-fg mb-8 max-w-md">
                            "Spontaneous, AI-powered date plans."
                            <br/>
                            "Ready when you are."
                        </p>
                        <button
                            type="button"
                            class="h-40 w-40 rounded-full bg-action-primary-bg text-action-primary-text text-2xl font-bold shadow-lg hover:scale-105 transition-transform"
                            on:click=move |_| vm.start_action.dispatch(())
                        >
                            "Start"
                        </button>
                    </div>
                }.into_view(),
                Screen::Locating => view! {
                    <div class="text-center">
                        <LoadingSpinner/>
                        <p class="text-sm text-fg-muted">"Finding your location..."</p>
                    </div>
                }.into_view(),
                Screen::Picker => view! {
                    <div class="w-full max-w-sm flex flex-col items-center gap-8">
                        <h1 class="text-3xl font-semibold text-brand">"Choose your Location"</h1>
                        <LocationPicker search_action=vm.search_action on_select=on_select />
                    </div>
                }.into_view(),
                Screen::Options => view! {
                    <OptionsCard state=state on_submit=on_submit on_change_location=on_change_location />
                }.into_view(),
                Screen::Done => {
                    let href = state.with(|s| s.plan_id.map(plan_detail_path)).unwrap_or_default();
                    view! {
                        <div class="text-center space-y-3">
                            <p class="text-lg font-semibold text-fg">"Your date plan is ready!"</p>
                            <a href=href class="text-action-primary-bg hover:underline">"View itinerary"</a>
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

#[component]
pub fn OptionsCard(
    state: RwSignal<WizardState>,
    on_submit: Callback<()>,
    #[prop(optional)] on_change_location: Option<Callback<()>>,
) -> impl IntoView {
    let remaining = Signal::derive(move || state.with(|s| s.remaining));
    let submitting = Signal::derive(move || state.with(|s| s.stage == WizardStage::FetchingPlan));
    let api_error = Signal::derive(move || state.with(|s| s.api_error.clone()));
    let address = Signal::derive(move || state.with(|s| s.address.clone()));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="w-full max-w-sm rounded-xl border border-border bg-surface-elevated shadow-2xl">
            <div class="p-6 text-center space-y-1">
                <h2 class="text-2xl font-semibold text-brand">"Just a few details..."</h2>
                <p class="text-sm font-semibold text-action-primary-bg">"What's the vibe for today?"</p>
                {move || address.get().map(|address| view! {
                    <p class="text-xs text-fg-muted">{address}</p>
                })}
            </div>
            <form on:submit=handle_submit>
                <div class="px-6 space-y-4">
                    <label class="block text-sm font-medium text-fg" for="plan-category">
                        "Theme / Category"
                    </label>
                    <select
                        id="plan-category"
                        class="w-full rounded-md border border-border-strong bg-surface-elevated px-3 py-2 text-sm"
                        on:change=move |ev| {
                            if let Some(category) = PlaceCategory::from_value(&event_target_value(&ev)) {
                                state.update(|s| s.form.category = category);
                            }
                        }
                    >
                        {PlaceCategory::ALL.into_iter().map(|category| view! {
                            <option
                                value=category.value()
                                selected=move || state.with(|s| s.form.category == category)
                            >
                                {format!("{} {}", category.icon(), category.label())}
                            </option>
                        }).collect_view()}
                    </select>
                    <label class="block text-sm font-medium text-fg" for="plan-budget">
                        "Max Budget"
                    </label>
                    <input
                        id="plan-budget"
                        type="number"
                        min="0"
                        placeholder="e.g., 250000"
                        class="w-full rounded-md border border-border-strong bg-surface-elevated px-3 py-2 text-sm"
                        prop:value=move || state.with(|s| s.form.budget.clone())
                        on:input=move |ev| state.update(|s| s.form.budget = event_target_value(&ev))
                    />
                    {move || api_error.get().map(|message| view! {
                        <p class="text-sm text-status-error-text" role="alert">{message}</p>
                    })}
                    <RemainingNotice remaining=remaining />
                    {on_change_location.map(|change| view! {
                        <button
                            type="button"
                            class="w-full text-xs text-fg-muted hover:text-fg underline"
                            on:click=move |_| change.call(())
                        >
                            "Change location"
                        </button>
                    })}
                </div>
                <div class="p-6 pt-4">
                    <Show
                        when=move || (remaining.get() > 0)
                        fallback=|| view! {
                            <a
                                href=paths::AUTH
                                class="flex w-full items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            >
                                "Sign in for More Plans"
                            </a>
                        }
                    >
                        <button
                            type="submit"
                            class="w-full rounded-md px-4 py-2 text-sm font-bold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-60"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Creating your itinerary..." } else { "Create My Itinerary" }}
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn RemainingNotice(#[prop(into)] remaining: Signal<u32>) -> impl IntoView {
    view! {
        {move || {
            let left = remaining.get();
            if left > 0 {
                view! {
                    <p class="text-xs text-center text-fg-muted">
                        "You have "
                        <span class="font-bold text-action-primary-bg">{left}</span>
                        " plans left. Sign-in for more date plans."
                    </p>
                }
                .into_view()
            } else {
                view! {
                    <div class="text-center p-2 bg-status-warning-bg border border-status-warning-border rounded-md">
                        <p class="text-xs text-status-warning-text">
                            "You've used all your free plans. Please sign in for more access."
                        </p>
                    </div>
                }
                .into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetching_plan_keeps_the_options_screen() {
        assert_eq!(screen_for(WizardStage::Options), Screen::Options);
        assert_eq!(screen_for(WizardStage::FetchingPlan), Screen::Options);
        assert_eq!(screen_for(WizardStage::MapPicker), Screen::Picker);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiError, Coordinates};
    use crate::test_support::ssr::render_to_string;

    fn options_state() -> RwSignal<WizardState> {
        let state = create_rw_signal(WizardState::default());
        state.update(|s| {
            s.start();
            s.location_found(Coordinates::new(-6.2, 106.8).unwrap());
        });
        state
    }

    #[test]
    fn options_card_shows_remaining_and_submit() {
        let html = render_to_string(move || {
            let state = options_state();
            view! { <OptionsCard state=state on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("plans left. Sign-in for more date plans."));
        assert!(html.contains("Create My Itinerary"));
        assert!(!html.contains("Sign in for More Plans"));
    }

    #[test]
    fn rate_limited_state_renders_sign_in_messaging() {
        let html = render_to_string(move || {
            let state = options_state();
            state.update(|s| {
                s.begin_submit();
                s.plan_failed(&ApiError::from_status(429, None));
            });
            view! { <OptionsCard state=state on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("You&#x27;ve used all your free plans")
            || html.contains("You've used all your free plans"));
        assert!(html.contains("Sign in for More Plans"));
        assert!(html.contains("href=\"/auth\""));
        assert!(!html.contains("Create My Itinerary"));
    }

    #[test]
    fn wizard_page_starts_on_the_start_screen() {
        let html = render_to_string(move || view! { <PlanWizardPage /> });
        assert!(html.contains("Spontaneous, AI-powered date plans."));
        assert!(html.contains("Start"));
    }
}
