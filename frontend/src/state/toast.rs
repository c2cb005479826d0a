use leptos::*;

pub const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, title: String, description: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            title,
            description,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Handle for raising transient notifications.
#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
}

impl Toaster {
    pub fn state(&self) -> RwSignal<ToastState> {
        self.state
    }

    fn show(&self, kind: ToastKind, title: &str, description: Option<&str>) {
        let mut id = 0;
        self.state.update(|s| {
            id = s.push(kind, title.to_string(), description.map(str::to_string));
        });
        schedule_dismiss(self.state, id);
    }

    pub fn success(&self, title: &str) {
        self.show(ToastKind::Success, title, None);
    }

    pub fn success_with(&self, title: &str, description: &str) {
        self.show(ToastKind::Success, title, Some(description));
    }

    pub fn error(&self, title: &str) {
        self.show(ToastKind::Error, title, None);
    }

    pub fn error_with(&self, title: &str, description: &str) {
        self.show(ToastKind::Error, title, Some(description));
    }

    pub fn info(&self, title: &str) {
        self.show(ToastKind::Info, title, None);
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(state: RwSignal<ToastState>, id: u64) {
    gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
        state.update(|s| s.dismiss(id));
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_state: RwSignal<ToastState>, _id: u64) {}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        state: create_rw_signal(ToastState::default()),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(provide_toaster)
}
