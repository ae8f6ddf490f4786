use gloo::timers::callback::Timeout;
use yew::prelude::*;

const TOAST_MILLIS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

pub struct UseToastResult {
    pub current: Option<Toast>,
    pub show: Callback<Toast>,
    pub dismiss: Callback<()>,
}

/// A single toast slot; a newer toast replaces the visible one
#[hook]
pub fn use_toast() -> UseToastResult {
    let current = use_state(|| Option::<Toast>::None);
    // Bumped on every show so a stale timer cannot hide a newer toast
    let generation = use_mut_ref(|| 0u32);

    let dismiss = {
        let current = current.clone();
        use_callback((), move |_: (), _| current.set(None))
    };

    let show = {
        let current = current.clone();
        let generation = generation.clone();
        use_callback((), move |toast: Toast, _| {
            let shown = {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            current.set(Some(toast));

            let current = current.clone();
            let generation = generation.clone();
            Timeout::new(TOAST_MILLIS, move || {
                if *generation.borrow() == shown {
                    current.set(None);
                }
            })
            .forget();
        })
    };

    UseToastResult {
        current: (*current).clone(),
        show,
        dismiss,
    }
}
