use std::time::Duration;

use leptos::{ev, html, prelude::*, task::spawn_local};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::toast::{use_notifier, Toaster};
use crate::booking::{
    popup_features, Overlay, Package, PackageAction, BOOKING_REQUEST_MESSAGE, PACKAGES, POPUP_NAME,
};
use crate::config;
use crate::contact::{Begin, ContactWorkflow, FetchTransport, SubmitOutcome, Transport};
use crate::content::ContactDetails;

const REFOCUS_DELAY: Duration = Duration::from_millis(50);

/// Opens the scheduler in a centred popup, or a new tab if popups are blocked.
fn open_scheduler(url: &str) {
    let window = window();
    let metric = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32
    };
    let features = popup_features(
        metric(window.screen_x()),
        metric(window.screen_y()),
        metric(window.outer_width()),
        metric(window.outer_height()),
    );
    match window.open_with_url_and_target_and_features(url, POPUP_NAME, &features) {
        Ok(Some(_)) => {}
        _ => {
            log::info!("scheduler popup blocked, opening a tab instead");
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("could not open scheduler: {e:?}");
            }
        }
    }
}

fn focus_name_field(name_ref: NodeRef<html::Input>) {
    let Some(input) = name_ref.get_untracked() else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    input.scroll_into_view_with_scroll_into_view_options(&options);
    if let Err(e) = input.focus() {
        log::warn!("could not focus name field: {e:?}");
    }
}

#[component]
fn InfoRow(label: &'static str, value: String, href: String) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-4">
            <div class="p-3 rounded-full bg-primary/10 text-primary text-xs font-semibold">
                {&label[..1]}
            </div>
            <div>
                <h4 class="font-medium">{label}</h4>
                <a href=href class="text-muted-foreground hover:text-primary transition-colors">
                    {value}
                </a>
            </div>
        </div>
    }
}

#[component]
fn BookingDialog(
    calendly: String,
    set_overlay: WriteSignal<Overlay>,
    on_request: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let url = StoredValue::new(calendly);

    view! {
        <div
            role="dialog"
            aria-modal="true"
            aria-labelledby="booking-title"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4"
            on:click=move |_| set_overlay.set(Overlay::Closed)
        >
            <div
                class="w-full max-w-lg rounded-xl bg-card p-6 shadow-xl"
                on:click=|ev| ev.stop_propagation()
            >
                <h3 id="booking-title" class="text-xl font-semibold mb-2">
                    "Book a 15-minute consult"
                </h3>
                <p class="text-sm text-muted-foreground mb-6">
                    "Pick a slot on my calendar, or send your preferred times by email and I'll confirm."
                </p>
                <div class="flex flex-col sm:flex-row gap-3">
                    <button
                        type="button"
                        class="cosmic-button flex-1"
                        on:click=move |_| {
                            url.with_value(|url| open_scheduler(url));
                            set_overlay.set(Overlay::Closed);
                        }
                    >
                        "Open Calendly"
                    </button>
                    <button
                        type="button"
                        class="flex-1 px-4 py-2 rounded-md border border-border/60"
                        on:click=move |_| on_request()
                    >
                        "Request by email"
                    </button>
                </div>
                <button
                    type="button"
                    class="mt-4 text-sm text-muted-foreground underline"
                    on:click=move |_| set_overlay.set(Overlay::Closed)
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PricingDialog(
    pricing: String,
    set_overlay: WriteSignal<Overlay>,
    on_prefill: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let pricing = StoredValue::new(pricing);
    let packages: &'static [Package] = &PACKAGES;

    view! {
        <div
            role="dialog"
            aria-modal="true"
            aria-labelledby="pricing-title"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4"
            on:click=move |_| set_overlay.set(Overlay::Closed)
        >
            <div
                class="w-full max-w-3xl rounded-xl bg-card p-6 shadow-xl"
                on:click=|ev| ev.stop_propagation()
            >
                <h3 id="pricing-title" class="text-xl font-semibold mb-6">
                    "Packages"
                </h3>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {packages
                        .iter()
                        .map(|package| {
                            view! {
                                <div class="rounded-lg gradient-border p-5 flex flex-col">
                                    <div class="font-semibold">{package.title}</div>
                                    <div class="text-2xl font-bold text-primary my-2">
                                        {package.price}
                                    </div>
                                    <ul class="text-sm text-muted-foreground space-y-1 flex-1">
                                        {package
                                            .bullets
                                            .iter()
                                            .map(|b| view! { <li>{*b}</li> })
                                            .collect_view()}
                                    </ul>
                                    <button
                                        type="button"
                                        class="mt-4 cosmic-button"
                                        on:click=move |_| {
                                            match pricing.with_value(|url| package.action(url)) {
                                                PackageAction::Prefill(message) => on_prefill(message),
                                                PackageAction::Navigate(url) => {
                                                    set_overlay.set(Overlay::Closed);
                                                    if let Err(e) = window().location().set_href(&url) {
                                                        log::warn!("could not open {url}: {e:?}");
                                                    }
                                                }
                                            }
                                        }
                                    >
                                        {package.action_label()}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    class="mt-6 text-sm text-muted-foreground underline"
                    on:click=move |_| set_overlay.set(Overlay::Closed)
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(#[prop(optional)] details: ContactDetails) -> impl IntoView {
    let notifier = use_notifier();
    let workflow = RwSignal::new(ContactWorkflow::default());
    let (overlay, set_overlay) = signal(Overlay::Closed);
    let (status, set_status) = signal(String::new());
    let status_ref = NodeRef::<html::Div>::new();
    let name_ref = NodeRef::<html::Input>::new();

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        let current = overlay.get_untracked();
        if !current.is_open() {
            return;
        }
        let next = current.on_key(&ev.key());
        if next != current {
            set_overlay.set(next);
        }
    });

    let report = move |outcome: SubmitOutcome| {
        if let Some((kind, text)) = outcome.notification() {
            set_status.set(text.clone());
            notifier.show(kind, text);
        }
        if !outcome.refocus_status() {
            return;
        }
        let focus = move || {
            if let Some(region) = status_ref.get_untracked() {
                if let Err(e) = region.focus() {
                    log::warn!("could not focus status region: {e:?}");
                }
            }
        };
        // the cleared form re-renders first on success
        if outcome == SubmitOutcome::Sent {
            set_timeout(focus, REFOCUS_DELAY);
        } else {
            focus();
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(begin) = workflow.try_update(ContactWorkflow::begin) else {
            return;
        };
        match begin {
            Begin::Done(outcome) => report(outcome),
            Begin::Send(payload) => spawn_local(async move {
                let response = FetchTransport
                    .post_json(config::form_endpoint(), &payload)
                    .await;
                if let Some(outcome) = workflow.try_update(|w| w.settle(response)) {
                    report(outcome);
                }
            }),
        }
    };

    let prefill = move |message: String| {
        workflow.update(|w| w.prefill_message(message));
        set_overlay.set(Overlay::Closed);
        focus_name_field(name_ref);
    };
    let request_by_email = move || prefill(BOOKING_REQUEST_MESSAGE.to_string());

    let submitting = move || workflow.with(ContactWorkflow::is_submitting);
    let social = details.social.clone();
    let calendly = details.calendly.clone();
    let pricing = details.pricing.clone();

    view! {
        <section id="contact" class="py-24 px-4 relative bg-secondary/30">
            <Toaster />
            <div class="container mx-auto max-w-5xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-4 text-center">
                    "Get In " <span class="text-primary">"Touch"</span>
                </h2>
                <p class="text-center text-muted-foreground mb-12 max-w-2xl mx-auto">
                    "Have a project in mind or want to collaborate? Feel free to reach out. I'm always open to discussing new opportunities."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
                        <div class="space-y-6 justify-center">
                            <InfoRow
                                label="Email"
                                value=details.email.clone()
                                href=format!("mailto:{}", details.email)
                            />
                            <InfoRow
                                label="Phone"
                                value=details.phone.clone()
                                href=format!("tel:{}", details.phone)
                            />
                            <InfoRow label="Location" value=details.location.clone() href="#".to_string() />
                        </div>
                        <div class="flex flex-wrap gap-3">
                            <button
                                type="button"
                                class="cosmic-button"
                                on:click=move |_| set_overlay.set(Overlay::Booking)
                            >
                                "Book a free consult"
                            </button>
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md border border-border/60"
                                on:click=move |_| set_overlay.set(Overlay::Pricing)
                            >
                                "Packages & Pricing"
                            </button>
                        </div>
                        <div class="pt-8">
                            <h4 class="font-medium mb-4">"Connect With Me"</h4>
                            <div class="flex space-x-4 justify-center">
                                <a href=social.linkedin target="_blank" rel="noopener noreferrer">
                                    "LinkedIn"
                                </a>
                                <a href=social.twitter target="_blank" rel="noopener noreferrer">
                                    "Twitter"
                                </a>
                                <a href=social.instagram target="_blank" rel="noopener noreferrer">
                                    "Instagram"
                                </a>
                                <a href=social.twitch target="_blank" rel="noopener noreferrer">
                                    "Twitch"
                                </a>
                            </div>
                        </div>
                    </div>
                    <div class="bg-card p-8 rounded-lg shadow-xs">
                        <h3 class="text-2xl font-semibold mb-6">"Send a Message"</h3>
                        <form class="space-y-6" novalidate=true on:submit=on_submit>
                            <div>
                                <label for="name" class="block text-sm font-medium mb-2">
                                    "Your Name"
                                </label>
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    id="name"
                                    name="name"
                                    required=true
                                    autocomplete="name"
                                    placeholder="Jane Doe"
                                    prop:value=move || workflow.with(|w| w.form().name.clone())
                                    on:input=move |ev| {
                                        workflow.update(|w| w.form_mut().name = event_target_value(&ev))
                                    }
                                    class="w-full px-4 py-3 rounded-md border border-input bg-background focus:outline-hidden focus:ring-2 focus:ring-primary"
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium mb-2">
                                    "Your Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required=true
                                    autocomplete="email"
                                    placeholder="jane@example.com"
                                    prop:value=move || workflow.with(|w| w.form().email.clone())
                                    on:input=move |ev| {
                                        workflow.update(|w| w.form_mut().email = event_target_value(&ev))
                                    }
                                    class="w-full px-4 py-3 rounded-md border border-input bg-background focus:outline-hidden focus:ring-2 focus:ring-primary"
                                />
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium mb-2">
                                    "Your Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required=true
                                    rows="5"
                                    placeholder="Hello, I'd like to talk about..."
                                    prop:value=move || workflow.with(|w| w.form().message.clone())
                                    on:input=move |ev| {
                                        workflow
                                            .update(|w| w.form_mut().message = event_target_value(&ev))
                                    }
                                    class="w-full px-4 py-3 rounded-md border border-input bg-background focus:outline-hidden focus:ring-2 focus:ring-primary resize-none"
                                ></textarea>
                            </div>
                            <div class="hidden" aria-hidden="true">
                                <label for="hp">"Leave this field empty"</label>
                                <input
                                    type="text"
                                    id="hp"
                                    name="hp"
                                    tabindex="-1"
                                    autocomplete="off"
                                    prop:value=move || workflow.with(|w| w.form().honeypot.clone())
                                    on:input=move |ev| {
                                        workflow
                                            .update(|w| w.form_mut().honeypot = event_target_value(&ev))
                                    }
                                />
                            </div>
                            <button
                                type="submit"
                                disabled=move || !workflow.with(ContactWorkflow::can_submit)
                                aria-busy=move || submitting().to_string()
                                class="cosmic-button w-full flex items-center justify-center gap-2 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                            </button>
                            <div
                                node_ref=status_ref
                                aria-live="polite"
                                tabindex="-1"
                                class="text-sm text-muted-foreground focus:outline-hidden"
                            >
                                {move || status.get()}
                            </div>
                        </form>
                    </div>
                </div>
            </div>
            {move || match overlay.get() {
                Overlay::Closed => ().into_any(),
                Overlay::Booking => {
                    view! {
                        <BookingDialog
                            calendly=calendly.clone()
                            set_overlay=set_overlay
                            on_request=request_by_email
                        />
                    }
                        .into_any()
                }
                Overlay::Pricing => {
                    view! { <PricingDialog pricing=pricing.clone() set_overlay=set_overlay on_prefill=prefill /> }
                        .into_any()
                }
            }}
        </section>
    }
}
