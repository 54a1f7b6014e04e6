use std::rc::Rc;

use dioxus::prelude::*;
use model::Ngo;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::verification_card::VerificationCard;

/// Which verification card, if any, is showing.
#[derive(Clone, PartialEq, Default)]
enum CardTarget {
    #[default]
    Closed,
    /// The card without an entity, showing its built-in demo record.
    Demo,
    Ngo(Rc<Ngo>),
}

#[component]
pub fn DirectoryScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut target = use_signal(CardTarget::default);

    let (is_open, ngo) = match target() {
        CardTarget::Closed => (false, None),
        CardTarget::Demo => (true, None),
        CardTarget::Ngo(ngo) => (true, Some(ngo)),
    };

    rsx! {
        Card {
            h2 { "Verified NGOs" }
            p {
                "Check an organization's payment and contact details before you donate."
            }
            div {
                style: "margin-bottom: 1rem;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| target.set(CardTarget::Demo),
                    "Preview card"
                }
            }

            if app_state.directory.is_empty() {
                EmptyState {
                    title: "No organizations listed".to_string(),
                    description: Some("The NGO directory could not be loaded.".to_string()),
                }
            } else {
                div {
                    class: "overflow-auto",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Location" }
                                th {}
                            }
                        }
                        tbody {
                            for (id, ngo) in app_state.directory.iter().map(|ngo| (ngo.id.clone(), ngo.clone())) {
                                DirectoryRow {
                                    key: "{id}",
                                    ngo,
                                    on_verify: move |ngo| target.set(CardTarget::Ngo(ngo)),
                                }
                            }
                        }
                    }
                }
            }
        }

        VerificationCard {
            ngo,
            is_open,
            on_close: move |_| target.set(CardTarget::Closed),
        }
    }
}

#[component]
fn DirectoryRow(ngo: Rc<Ngo>, on_verify: EventHandler<Rc<Ngo>>) -> Element {
    let name = ngo.name().unwrap_or("Unnamed organization").to_string();
    let verified = ngo.is_verified();
    let category = ngo.category.clone().unwrap_or_default();
    let location = ngo.location().unwrap_or_default().to_string();

    rsx! {
        tr {
            td {
                "{name} "
                if verified {
                    Badge { class: "verified".to_string(), "Verified" }
                }
            }
            td { "{category}" }
            td { "{location}" }
            td {
                Button {
                    on_click: move |_| on_verify.call(ngo.clone()),
                    "Verify"
                }
            }
        }
    }
}
