use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::referral::submission::{Notification, Severity};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        severity: Severity,
    },
    Dismiss(u64),
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, description, severity } => {
                next.next_id += 1;
                next.toasts.push(Toast {
                    id: next.next_id,
                    title,
                    description,
                    severity,
                });
            }
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        next.into()
    }
}

/// Handle components use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    list: UseReducerHandle<ToastList>,
}

impl ToastHandle {
    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>, severity: Severity) {
        self.list.dispatch(ToastAction::Push {
            title: title.into(),
            description: description.into(),
            severity,
        });
    }

    pub fn show(&self, notification: &Notification) {
        self.notify(
            notification.title.clone(),
            notification.description.clone(),
            notification.severity,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.list.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast called outside ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = ToastHandle { list: list.clone() };

    let on_dismiss = {
        let handle = handle.clone();
        Callback::from(move |id: u64| handle.dismiss(id))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <div class="toast-viewport">
                <style>
                {r#".toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 100;
                    max-width: 380px;
                }
                .toast {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1rem 2.5rem 1rem 1rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                    position: relative;
                    animation: toastIn 0.25s ease-out;
                }
                .toast.destructive {
                    background: #ef4444;
                    border-color: #ef4444;
                    color: #fff;
                }
                .toast-title {
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .toast-description {
                    font-size: 0.875rem;
                    opacity: 0.9;
                    margin-top: 0.25rem;
                }
                .toast-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }"#}
                </style>
                {
                    list.toasts().iter().map(|toast| html! {
                        <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    // Auto-dismiss; dropping the timeout on unmount cancels it.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.severity {
        Severity::Success => classes!("toast"),
        Severity::Error => classes!("toast", "destructive"),
    };

    html! {
        <div class={class} role="status">
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
            <button class="toast-close" onclick={close} aria-label="Close">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, title: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push {
            title: title.to_string(),
            description: String::new(),
            severity: Severity::Success,
        })
    }

    #[test]
    fn pushed_toasts_get_increasing_ids() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let ids: Vec<_> = list.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let list = list.reduce(ToastAction::Dismiss(1));
        let titles: Vec<_> = list.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second"]);
    }

    #[test]
    fn dismissing_an_unknown_toast_keeps_the_same_list() {
        let list = push(Rc::new(ToastList::default()), "only");
        let after = list.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&list, &after));
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let list = push(Rc::new(ToastList::default()), "a").reduce(ToastAction::Dismiss(1));
        let list = push(list, "b");
        assert_eq!(list.toasts()[0].id, 2);
    }
}
