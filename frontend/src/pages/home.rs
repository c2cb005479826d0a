use crate::router::paths;
use leptos::*;

const STEPS: [(&str, &str); 3] = [
    (
        "Select Your Vibe",
        "Choose your location, budget, and the kind of date you feel like.",
    ),
    (
        "Get Your Plan",
        "Instantly receive a curated date plan tailored just for you.",
    ),
    (
        "Enjoy Your Date!",
        "Follow the plan, have an amazing time, and make unforgettable memories.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="bg-surface text-fg">
            <section class="py-20 px-4">
                <div class="max-w-5xl mx-auto text-center">
                    <h1 class="text-4xl md:text-6xl font-bold leading-tight">
                        "Say goodbye to boring dates."
                        <br />
                        <span class="text-brand">"Say hello to KencanKuy."</span>
                    </h1>
                    <p class="mt-4 text-lg md:text-xl text-fg-muted">
                        "Your personal date planner for Jakarta. Curated plans, just a tap away."
                    </p>
                    <a
                        href=paths::APP
                        class="mt-8 inline-flex rounded-full px-8 py-3 text-base font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    >
                        "Plan a Date Now"
                    </a>
                </div>
            </section>
            <section class="py-16 px-4 bg-surface-muted">
                <div class="max-w-5xl mx-auto text-center">
                    <h2 class="text-3xl font-bold mb-12">"How It Works"</h2>
                    <ol class="grid grid-cols-1 md:grid-cols-3 gap-12">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, (title, body))| view! {
                                <li>
                                    <div class="flex items-center justify-center w-12 h-12 mx-auto mb-4 rounded-full bg-action-primary-bg text-action-primary-text text-2xl font-bold">
                                        {index + 1}
                                    </div>
                                    <h3 class="text-xl font-bold mb-2">{*title}</h3>
                                    <p class="text-fg-muted">{*body}</p>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>
            <section class="py-20 px-4 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Your next great date is waiting"</h2>
                <p class="text-fg-muted mb-8">"Spontaneous, AI-powered date plans in a few taps."</p>
                <a
                    href=paths::APP
                    class="inline-flex rounded-full px-8 py-3 text-base font-semibold bg-action-primary-bg text-action-primary-text"
                >
                    "Create a Plan"
                </a>
            </section>
        </div>
    }
}
