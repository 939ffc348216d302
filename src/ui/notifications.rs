//! Modal notifications
//!
//! One notice is shown at a time. [`NotificationCenter`] implements
//! [`Notifier`]: `notify` opens the modal and returns immediately,
//! `prompt` resolves once the modal is confirmed, cancelled or timed out.

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::core::{DialogResult, Notice, NoticeIcon, Notifier};
use crate::ui::common::BaseModal;

/// Notice currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Holds the active notice and the pending answer for it
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    current: RwSignal<Option<ActiveNotice>>,
    responder: StoredValue<Option<oneshot::Sender<DialogResult>>>,
    next_id: StoredValue<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            responder: StoredValue::new(None),
            next_id: StoredValue::new(0),
        }
    }

    /// Get the active notice signal for the host
    pub fn current(&self) -> RwSignal<Option<ActiveNotice>> {
        self.current
    }

    fn open(&self, notice: Notice, responder: Option<oneshot::Sender<DialogResult>>) {
        // A replaced prompt counts as dismissed
        self.answer(DialogResult::dismissed());

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.responder.set_value(responder);
        self.current.set(Some(ActiveNotice { id, notice }));
    }

    fn answer(&self, result: DialogResult) {
        if let Some(tx) = self.responder.try_update_value(Option::take).flatten() {
            let _ = tx.send(result);
        }
    }

    /// Close notice `id` if it is still the active one
    pub fn resolve(&self, id: u64, result: DialogResult) {
        let is_active = self
            .current
            .with_untracked(|c| c.as_ref().is_some_and(|a| a.id == id));
        if !is_active {
            return;
        }

        self.current.set(None);
        self.answer(result);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notice: Notice) {
        self.open(notice, None);
    }

    async fn prompt(&self, notice: Notice) -> DialogResult {
        let (tx, rx) = oneshot::channel();
        self.open(notice, Some(tx));
        rx.await.unwrap_or_default()
    }
}

/// Provide the notification center to the component tree
pub fn provide_notification_center() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notification_center() -> NotificationCenter {
    expect_context::<NotificationCenter>()
}

/// Renders the active notice, if any. Place once at the app root.
#[component]
pub fn NoticeHost(center: NotificationCenter) -> impl IntoView {
    move || {
        center.current().get().map(|active| {
            view! { <NoticeModal active=active center=center /> }
        })
    }
}

#[component]
fn NoticeModal(active: ActiveNotice, center: NotificationCenter) -> impl IntoView {
    let ActiveNotice { id, notice } = active;

    // Auto-dismiss if requested
    if let Some(_ms) = notice.timer_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                center.resolve(id, DialogResult::dismissed());
            });
        }
    }

    let (accent_class, icon_path) = match notice.icon {
        NoticeIcon::Success => (
            "text-green-500",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NoticeIcon::Error => (
            "text-red-500",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NoticeIcon::Warning => (
            "text-yellow-500",
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
        ),
        NoticeIcon::Info => (
            "text-blue-500",
            "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    let is_destructive = notice.icon == NoticeIcon::Warning && notice.is_confirmation();
    let confirm_class = if is_destructive {
        "btn-danger"
    } else {
        "btn-primary"
    };

    let dismiss = Callback::new(move |_| center.resolve(id, DialogResult::dismissed()));

    view! {
        <BaseModal on_close=dismiss>
            <div class="flex flex-col items-center text-center space-y-4">
                <svg class=format!("w-16 h-16 {}", accent_class) fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
                <h3 class="text-2xl font-semibold text-white">{notice.title.clone()}</h3>
                <p class="text-gray-300">{notice.text.clone()}</p>

                {(notice.show_confirm_button || notice.cancel_text.is_some()).then(|| {
                    let cancel = notice.cancel_text.clone();
                    let confirm_text = notice.confirm_text.clone();
                    let show_confirm = notice.show_confirm_button;
                    view! {
                        <div class="flex items-center justify-center gap-3 pt-2">
                            {show_confirm.then(|| view! {
                                <button
                                    class=confirm_class
                                    on:click=move |_| center.resolve(id, DialogResult::confirmed())
                                >
                                    {confirm_text.clone()}
                                </button>
                            })}
                            {cancel.map(|text| view! {
                                <button
                                    class="btn-secondary"
                                    on:click=move |_| center.resolve(id, DialogResult::dismissed())
                                >
                                    {text}
                                </button>
                            })}
                        </div>
                    }
                })}
            </div>
        </BaseModal>
    }
}
