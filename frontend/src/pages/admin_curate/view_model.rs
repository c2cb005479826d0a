use super::{
    form::{apply_update, EditPlaceForm},
    repository::CurateRepository,
};
use crate::{
    api::{ApiError, CuratedPlace, Paginated, UpdateCuratedPlaceRequest},
    state::{auth::use_api_client, toast::use_toaster},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub last_page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            last_page: 1,
        }
    }
}

impl Pager {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.last_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }
}

#[derive(Clone, Copy)]
pub struct CurateViewModel {
    pub pager: RwSignal<Pager>,
    pub search: RwSignal<String>,
    pub rows: RwSignal<Vec<CuratedPlace>>,
    pub selected: RwSignal<Option<CuratedPlace>>,
    pub edit_form: RwSignal<EditPlaceForm>,
    pub fetch_action: Action<(u32, String), Result<Paginated<CuratedPlace>, ApiError>>,
    pub save_action: Action<(i64, UpdateCuratedPlaceRequest), Result<(i64, UpdateCuratedPlaceRequest), ApiError>>,
}

impl CurateViewModel {
    pub fn edit(&self, place: CuratedPlace) {
        self.edit_form.set(EditPlaceForm::from_place(&place));
        self.selected.set(Some(place));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }

    pub fn save(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(id) = self.selected.with_untracked(|p| p.as_ref().map(|p| p.id)) else {
            return;
        };
        let payload = self.edit_form.with_untracked(EditPlaceForm::to_request);
        self.save_action.dispatch((id, payload));
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.fetch_action.pending().into()
    }
}

pub fn use_curate_view_model() -> CurateViewModel {
    let repository = store_value(CurateRepository::new(use_api_client()));
    let toaster = use_toaster();

    let pager = create_rw_signal(Pager::default());
    let search = create_rw_signal(String::new());
    let rows = create_rw_signal(Vec::<CuratedPlace>::new());
    let selected = create_rw_signal(None::<CuratedPlace>);
    let edit_form = create_rw_signal(EditPlaceForm::default());

    let fetch_action = create_action(move |(page, search): &(u32, String)| {
        let repo = repository.get_value();
        let page = *page;
        let search = search.clone();
        async move { repo.list(page, &search).await }
    });

    let save_action = create_action(move |(id, payload): &(i64, UpdateCuratedPlaceRequest)| {
        let repo = repository.get_value();
        let id = *id;
        let payload = payload.clone();
        async move { repo.update(id, &payload).await.map(|_| (id, payload)) }
    });

    create_effect(move |_| {
        let page = pager.with(|p| p.page);
        fetch_action.dispatch((page, search.get()));
    });

    create_effect(move |_| match fetch_action.value().get() {
        Some(Ok(result)) => {
            rows.set(result.data);
            pager.update(|p| p.last_page = result.last_page.max(1));
        }
        Some(Err(err)) => {
            log::error!("failed to fetch curated places: {}", err);
            toaster.error("Failed to fetch places.");
        }
        None => {}
    });

    create_effect(move |_| match save_action.value().get() {
        Some(Ok((id, payload))) => {
            rows.update(|rows| {
                if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                    apply_update(row, &payload);
                }
            });
            toaster.success("Place updated successfully!");
            selected.set(None);
        }
        Some(Err(err)) => {
            log::error!("failed to update curated place: {}", err);
            toaster.error("Failed to update place.");
        }
        None => {}
    });

    CurateViewModel {
        pager,
        search,
        rows,
        selected,
        edit_form,
        fetch_action,
        save_action,
    }
}

#[cfg(test)]
mod tests {
    use super::Pager;

    #[test]
    fn previous_never_goes_below_one() {
        let pager = Pager::default();
        assert!(!pager.has_previous());
        assert_eq!(pager.previous().page, 1);
    }

    #[test]
    fn next_stops_being_offered_on_the_last_page() {
        let pager = Pager {
            page: 2,
            last_page: 3,
        };
        assert!(pager.has_next());
        let last = pager.next();
        assert_eq!(last.label(), "Page 3 of 3");
        assert!(!last.has_next());
        assert_eq!(last.previous().page, 2);
    }
}
