use leptos::prelude::*;

use crate::notify::{NotificationCenter, NotificationKind};

#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<NotificationCenter>);

impl Notifier {
    /// Shows a toast and schedules its removal.
    pub fn show(&self, kind: NotificationKind, text: String) {
        let center = self.0;
        if let Some(shown) = center.try_update(|c| c.show(kind, text)) {
            set_timeout(
                move || center.update(|c| c.dismiss(shown.id)),
                kind.lifetime(),
            );
        }
    }

    fn dismiss(&self, id: u64) {
        self.0.update(|c| c.dismiss(id));
    }
}

pub fn provide_notifications() {
    provide_context(Notifier(RwSignal::new(NotificationCenter::default())));
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2" role="status">
            {move || {
                notifier
                    .0
                    .with(|c| c.active().to_vec())
                    .into_iter()
                    .map(|n| {
                        let color = match n.kind {
                            NotificationKind::Success => "border-green-500 text-green-700 dark:text-green-300",
                            NotificationKind::Error => "border-red-500 text-red-700 dark:text-red-300",
                        };
                        let id = n.id;
                        view! {
                            <button
                                type="button"
                                class=format!(
                                    "max-w-sm px-4 py-3 rounded-md border-l-4 bg-card shadow-lg text-sm text-left {color}",
                                )
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {n.text}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
