//! The Care4All verification card overlay.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use model::links;
use model::prefs::card_prefs::CardPrefs;
use model::Ngo;

use crate::actions;
use crate::actions::CardEffect;
use crate::actions::Resolved;
use crate::card_state::CardView;
use crate::card_state::CopyField;
use crate::card_state::EntityRef;
use crate::compat;
use crate::components::icons::CheckCircleIcon;
use crate::components::icons::CopyIcon;
use crate::components::icons::ExternalLinkIcon;
use crate::components::icons::FlagIcon;
use crate::components::icons::MailIcon;
use crate::components::icons::MapPinIcon;
use crate::components::icons::PhoneIcon;
use crate::components::icons::QrCodeIcon;
use crate::components::icons::WhatsappIcon;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::CloseButton;
use crate::components::pico::Overlay;
use crate::components::pico::ReadOnlyInput;
use crate::components::remote_image::RemoteImage;
use crate::hooks::use_card_view::use_card_view;
use crate::toast;
use crate::Route;

/// How long a copy button shows the check mark.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Props, Clone)]
pub struct VerificationCardProps {
    ngo: Option<Rc<Ngo>>,
    #[props(default = true)]
    is_open: bool,
    on_close: Option<EventHandler<()>>,
}

// The entity is compared by reference: a re-supplied record is a new
// entity even if its fields are equal.
impl PartialEq for VerificationCardProps {
    fn eq(&self, other: &Self) -> bool {
        EntityRef::new(self.ngo.clone()) == EntityRef::new(other.ngo.clone())
            && self.is_open == other.is_open
            && self.on_close == other.on_close
    }
}

/// Verification card for `ngo`, shown over a dimmed backdrop.
///
/// Without an `ngo` the card previews a built-in demo organization. When
/// `is_open` is false nothing is rendered and no state is kept. The close
/// control only appears if `on_close` is given.
#[allow(non_snake_case)]
pub fn VerificationCard(props: VerificationCardProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    rsx! {
        Overlay {
            CardBody {
                entity: EntityRef::new(props.ngo),
                on_close: props.on_close,
            }
        }
    }
}

/// Runs [`CardEffect`]s on behalf of one mounted card.
#[derive(Clone, Copy)]
struct Dispatcher {
    view: Signal<CardView>,
    on_close: Option<EventHandler<()>>,
}

impl Dispatcher {
    fn run(self, effects: Vec<CardEffect>) {
        for effect in effects {
            match effect {
                CardEffect::Notify(message) => toast::publish(message),
                CardEffect::WriteClipboard { field, text } => {
                    // Tasks are owned by the card's scope and dropped with it.
                    spawn(async move {
                        let written = compat::clipboard_set(text).await;
                        if !written {
                            tracing::warn!("clipboard write for {} was refused", field);
                        }
                        let mut view = self.view;
                        let follow_up = {
                            let mut state = view.write();
                            actions::copy_finished(&mut state, field, written)
                        };
                        self.run(follow_up);
                    });
                }
                CardEffect::ScheduleClear(marker) => {
                    let mut view = self.view;
                    spawn(async move {
                        compat::sleep(COPY_FEEDBACK).await;
                        view.write().clear_copied(marker);
                    });
                }
                CardEffect::OpenExternal(url) => {
                    if !compat::open_external(&url) {
                        tracing::warn!("could not open {}", url);
                    }
                }
                CardEffect::Navigate { id } => {
                    tracing::debug!("opening {}", links::profile_path(&id));
                    navigator().push(Route::ProfileScreen { id });
                }
                CardEffect::Close => {
                    if let Some(on_close) = self.on_close {
                        on_close.call(());
                    }
                }
            }
        }
    }
}

#[component]
fn CardBody(entity: EntityRef, on_close: Option<EventHandler<()>>) -> Element {
    let prefs = try_use_context::<CardPrefs>().unwrap_or_default();
    let resolved = Resolved::from_supplied(entity.get().cloned());
    let mut view = use_card_view(entity, prefs);
    let dispatcher = Dispatcher { view, on_close };

    let record = resolved.record().clone();
    let name = record.name().unwrap_or("Unnamed organization").to_string();
    let verified = record.is_verified();
    let upi_id = record.upi_id().map(str::to_string);
    let upi_display = upi_id.clone().unwrap_or_else(|| "Not available".to_string());
    let upi_missing = upi_id.is_none();
    let phone = record.phone().map(str::to_string);
    let phone_to_copy = phone.clone();
    let email = record.email().map(str::to_string);
    let email_to_copy = email.clone();
    let location = record.location().unwrap_or("Location not available").to_string();

    let state = view.read();
    let generation = state.generation();
    let logo_src = state.logo.src().to_string();
    let logo_loaded = state.logo.is_loaded();
    let qr_src = state.qr.src().to_string();
    let qr_loaded = state.qr.is_loaded();
    let upi_copied = state.is_copied(CopyField::UpiId);
    let phone_copied = state.is_copied(CopyField::Phone);
    let email_copied = state.is_copied(CopyField::Email);
    drop(state);

    let copy = move |field: CopyField, value: Option<String>| {
        dispatcher.run(actions::copy(field, value.as_deref()));
    };

    rsx! {
        Card {
            class: "verification-card".to_string(),
            if let Some(on_close) = on_close {
                CloseButton { on_close }
            }

            header {
                div {
                    class: "identity",
                    RemoteImage {
                        key: "logo-{generation}",
                        src: logo_src,
                        alt: format!("{name} logo"),
                        loaded: logo_loaded,
                        frame_class: "logo-frame".to_string(),
                        on_load: move |_| view.write().logo.on_load(),
                        on_error: move |_| view.write().logo.on_error(),
                    }
                    div {
                        h2 { class: "card-title", "{name}" }
                        if verified {
                            Badge {
                                class: "verified".to_string(),
                                CheckCircleIcon {}
                                " Verified on Care4All"
                            }
                        }
                    }
                }
            }

            section {
                h3 { QrCodeIcon {} " QR Code for UPI Donation" }
                div {
                    class: "qr-row",
                    RemoteImage {
                        key: "qr-{generation}",
                        src: qr_src,
                        alt: "UPI QR Code".to_string(),
                        loaded: qr_loaded,
                        frame_class: "qr-frame".to_string(),
                        spinner_class: "icon-xl".to_string(),
                        on_load: move |_| view.write().qr.on_load(),
                        on_error: move |_| view.write().qr.on_error(),
                    }
                }
            }

            section {
                h3 { "UPI ID" }
                ReadOnlyInput {
                    value: upi_display,
                    muted: upi_missing,
                    Button {
                        button_type: ButtonType::Secondary,
                        disabled: upi_missing,
                        title: "Copy UPI ID".to_string(),
                        on_click: move |_| copy(CopyField::UpiId, upi_id.clone()),
                        if upi_copied {
                            CheckCircleIcon {}
                        } else {
                            CopyIcon {}
                        }
                    }
                }
            }

            section {
                h3 { "Contact Info" }
                div {
                    class: "contact-list",
                    if let Some(phone) = phone {
                        div {
                            class: "contact-row",
                            span { class: "contact-value", PhoneIcon {} "{phone}" }
                            div {
                                class: "contact-actions",
                                Button {
                                    button_type: ButtonType::Secondary,
                                    outline: true,
                                    class: "icon-button".to_string(),
                                    title: "Message on WhatsApp".to_string(),
                                    on_click: move |_| dispatcher.run(actions::message(&record)),
                                    WhatsappIcon {}
                                }
                                Button {
                                    button_type: ButtonType::Secondary,
                                    outline: true,
                                    class: "icon-button".to_string(),
                                    title: "Copy phone number".to_string(),
                                    on_click: move |_| copy(CopyField::Phone, phone_to_copy.clone()),
                                    if phone_copied {
                                        CheckCircleIcon { class: "success".to_string() }
                                    } else {
                                        CopyIcon {}
                                    }
                                }
                            }
                        }
                    } else {
                        div {
                            class: "contact-row",
                            span { class: "contact-value unavailable", PhoneIcon {} "Phone not available" }
                        }
                    }

                    if let Some(email) = email {
                        div {
                            class: "contact-row",
                            span { class: "contact-value", MailIcon {} "{email}" }
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                class: "icon-button".to_string(),
                                title: "Copy email".to_string(),
                                on_click: move |_| copy(CopyField::Email, email_to_copy.clone()),
                                if email_copied {
                                    CheckCircleIcon { class: "success".to_string() }
                                } else {
                                    CopyIcon {}
                                }
                            }
                        }
                    } else {
                        div {
                            class: "contact-row",
                            span { class: "contact-value unavailable", MailIcon {} "Email not available" }
                        }
                    }

                    div {
                        class: "contact-row",
                        span { class: "contact-value", MapPinIcon {} "{location}" }
                    }
                }
            }

            footer {
                Button {
                    class: "wide".to_string(),
                    on_click: move |_| {
                        dispatcher.run(actions::view_profile(&resolved, on_close.is_some()))
                    },
                    ExternalLinkIcon {}
                    " View on Care4All"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    class: "wide report".to_string(),
                    on_click: move |_| dispatcher.run(actions::report()),
                    FlagIcon {}
                    " Report Incorrect Information"
                }
                small { class: "powered-by", "Powered by Care4All NGO Analyzer" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::VirtualDom;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The opening tag of the button titled `title`.
    fn button_tag<'a>(html: &'a str, title: &str) -> &'a str {
        let at = html.find(&format!("title=\"{title}\"")).unwrap();
        let start = html[..at].rfind("<button").unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..end]
    }

    fn is_disabled(tag: &str) -> bool {
        tag.contains("disabled") && !tag.contains("disabled=false")
    }

    #[test]
    fn test_closed_card_renders_nothing() {
        fn app() -> Element {
            rsx! {
                VerificationCard { is_open: false }
            }
        }
        let html = render(app);
        assert!(!html.contains("overlay"));
        assert!(!html.contains("Care4All"));
    }

    #[test]
    fn test_open_by_default_shows_demo_record() {
        fn app() -> Element {
            rsx! {
                VerificationCard {}
            }
        }
        let html = render(app);
        assert!(html.contains("class=\"overlay\""));
        assert!(html.contains("Children First Foundation"));
        assert!(html.contains("Verified on Care4All"));
        assert!(html.contains("Powered by Care4All NGO Analyzer"));
        // no close control without a close callback
        assert!(!html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn test_blank_upi_shows_not_available_and_disables_copy() {
        fn app() -> Element {
            let ngo = Rc::new(Ngo {
                id: "ngo42".to_string(),
                name: Some("Green Earth".to_string()),
                upi_id: Some(String::new()),
                ..Default::default()
            });
            rsx! {
                VerificationCard { ngo }
            }
        }
        let html = render(app);
        assert!(html.contains("value=\"Not available\""));
        assert!(is_disabled(button_tag(&html, "Copy UPI ID")));
        assert!(html.contains("Phone not available"));
        assert!(html.contains("Email not available"));
        assert!(html.contains("Location not available"));
    }

    #[test]
    fn test_present_upi_is_copyable() {
        fn app() -> Element {
            let ngo = Rc::new(Ngo {
                id: "x7".to_string(),
                upi_id: Some("x7@ybl".to_string()),
                phone: Some("+91 98765 43210".to_string()),
                ..Default::default()
            });
            rsx! {
                VerificationCard { ngo, on_close: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("value=\"x7@ybl\""));
        assert!(!is_disabled(button_tag(&html, "Copy UPI ID")));
        assert!(html.contains("+91 98765 43210"));
        assert!(html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn test_props_compare_entity_by_reference() {
        let ngo = Rc::new(Ngo {
            id: "x7".to_string(),
            ..Default::default()
        });
        let props = |ngo: Option<Rc<Ngo>>| VerificationCardProps {
            ngo,
            is_open: true,
            on_close: None,
        };

        assert!(props(Some(ngo.clone())) == props(Some(ngo.clone())));
        assert!(props(Some(ngo.clone())) != props(Some(Rc::new((*ngo).clone()))));
        assert!(props(None) == props(None));
    }
}
