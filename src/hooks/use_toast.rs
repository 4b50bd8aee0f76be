use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Cheap handle pages use to raise notifications
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<(ToastKind, String)>,
}

impl Toaster {
    pub fn new(push: Callback<(ToastKind, String)>) -> Self {
        Self { push }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Error, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Info, message.into()));
    }
}

/// Handle returned by `use_toasts`
#[derive(Clone, PartialEq)]
pub struct ToastsHandle {
    pub queue: UseReducerHandle<ToastQueue>,
    pub toaster: Toaster,
    pub dismiss: Callback<u32>,
}

#[hook]
pub fn use_toasts() -> ToastsHandle {
    let queue = use_reducer(ToastQueue::default);

    let toaster = {
        let queue = queue.clone();
        Toaster::new(Callback::from(move |(kind, message): (ToastKind, String)| {
            if kind == ToastKind::Error {
                gloo::console::warn!(message.clone());
            }
            queue.dispatch(ToastAction::Push(kind, message));
        }))
    };

    let dismiss = {
        let queue = queue.clone();
        Callback::from(move |id| queue.dispatch(ToastAction::Dismiss(id)))
    };

    ToastsHandle {
        queue,
        toaster,
        dismiss,
    }
}
