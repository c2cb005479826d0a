#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{DatePlace, DatePlan, DateStep, UserProfile};
    use crate::identity::IdentityUser;
    use crate::state::auth::AuthState;
    use chrono::{TimeZone, Utc};
    use leptos::*;

    pub fn alice() -> IdentityUser {
        IdentityUser {
            uid: "uid-alice".into(),
            email: Some("alice@example.com".into()),
            display_name: Some("Alice".into()),
        }
    }

    pub fn alice_profile() -> UserProfile {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        UserProfile {
            id: "uid-alice".into(),
            email: "alice@example.com".into(),
            name: Some("Alice".into()),
            partner_name: Some("Bob".into()),
            partner_email: None,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn place(id: i64, name: &str) -> DatePlace {
        DatePlace {
            id,
            name: name.into(),
            address: format!("{} street", name),
            google_place_id: format!("g-{}", id),
            photo_reference: None,
            cached_photo_url: None,
            latitude: -6.2,
            longitude: 106.8,
        }
    }

    pub fn sample_plan(id: i64, owner: Option<&str>) -> DatePlan {
        let at = Utc.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap();
        DatePlan {
            id,
            steps: vec![
                DateStep {
                    id: 1,
                    date_plan_id: id,
                    step_number: 1,
                    place_id: 10,
                    place: place(10, "Taman Menteng"),
                },
                DateStep {
                    id: 2,
                    date_plan_id: id,
                    step_number: 2,
                    place_id: 20,
                    place: place(20, "Kopi Senja"),
                },
            ],
            user_id: owner.map(str::to_string),
            theme: "ROMANTIC".into(),
            created_at: at,
            updated_at: at,
        }
    }

    pub fn provide_auth(
        user: Option<IdentityUser>,
        is_ready: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let profile = user.as_ref().map(|_| alice_profile());
        let (auth, set_auth) = create_signal(AuthState {
            user,
            profile,
            is_ready,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
