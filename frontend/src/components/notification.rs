use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Distinguishes repeated shows of the same message.
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn message_sent(id: u32) -> Self {
        Self {
            id,
            title: "Message Sent!".to_string(),
            description: "Thank you for your inquiry. We'll get back to you within 24 hours.".to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Toast,
    pub on_dismiss: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    // Re-arm the dismiss timer for every toast shown, even a repeated message
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NOTIFICATION_DURATION_MS, move || {
                    on_dismiss.emit(());
                });
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        max-width: 360px;
                        padding: 16px 20px;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.96);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.25);
                        border-left: 4px solid var(--forest-medium);
                        animation: toastIn 0.4s ease-out forwards;
                        z-index: 60;
                    }
                    .toast-title {
                        font-weight: 700;
                        color: var(--forest-deep);
                        margin-bottom: 4px;
                    }
                    .toast-description {
                        color: rgba(26, 46, 34, 0.75);
                        font-size: 14px;
                    }
                    .toast-close {
                        position: absolute;
                        top: 8px;
                        right: 10px;
                        background: none;
                        border: none;
                        font-size: 16px;
                        color: var(--forest-deep);
                    }
                "#}
            </style>
            <button class="toast-close" aria-label="Dismiss" onclick={close}>{"✕"}</button>
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_message_gets_a_fresh_timer_key() {
        let first = Toast::message_sent(1);
        let second = Toast::message_sent(2);
        assert_eq!(first.title, second.title);
        assert_eq!(first.description, second.description);
        assert_ne!(first.id, second.id);
    }
}
