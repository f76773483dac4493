use std::collections::BTreeMap;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(5000),
        }
    }
}

/// Toasts keyed by insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    next: u64,
    pub toasts: BTreeMap<u64, Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut state = (*self).clone();

        match action {
            ToastAction::Add(toast) => {
                state.toasts.insert(state.next, toast);
                state.next += 1;
            }
            ToastAction::Remove(id) => {
                state.toasts.retain(|_, toast| toast.id != id);
            }
        }

        std::rc::Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!("toast outside ToastProvider: {}", toast.message);
            return;
        };
        let toast_id = toast.id;
        let duration = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastType::Error));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastType::Success));
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}
