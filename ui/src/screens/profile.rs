use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Accordion;
use crate::components::pico::Badge;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::Route;

/// Groups digits in threes: `1250000` -> `1,250,000`.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

#[component]
fn Stat(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            small { "{label}" }
            strong { "{value}" }
        }
    }
}

/// Read-only profile of a listed NGO, the target of "View on Care4All".
#[component]
pub fn ProfileScreen(id: String) -> Element {
    let app_state = use_context::<AppState>();

    let Some(ngo) = app_state.directory.find(&id) else {
        return rsx! {
            Card {
                EmptyState {
                    title: "Organization not found".to_string(),
                    description: Some(format!("No NGO with id \"{id}\" is listed on Care4All.")),
                    primary_action: Some(rsx! {
                        Link { to: Route::DirectoryScreen {}, "Back to directory" }
                    }),
                }
            }
        };
    };

    let name = ngo.name().unwrap_or("Unnamed organization").to_string();
    let description = ngo
        .description
        .clone()
        .unwrap_or_else(|| "No description provided.".to_string());
    let category = or_dash(ngo.category.as_deref());
    let location = or_dash(ngo.location());
    let reg_number = or_dash(ngo.reg_number.as_deref());
    let founded = or_dash(ngo.founded_year);
    let raised = or_dash(ngo.total_raised.map(|r| format!("₹{}", group_digits(r))));
    let supporters = or_dash(ngo.supporters.map(u64::from).map(group_digits));
    let trust = or_dash(ngo.trust_score.map(|s| format!("{s}/100")));
    let website = ngo.website().map(str::to_string);

    rsx! {
        Card {
            Link { to: Route::DirectoryScreen {}, "← All organizations" }
            hgroup {
                h2 {
                    "{name} "
                    if ngo.is_verified() {
                        Badge { class: "verified".to_string(), "Verified" }
                    }
                }
                p { "{category} · {location}" }
            }
            p { "{description}" }

            Grid {
                Stat { label: "Founded".to_string(), value: founded }
                Stat { label: "Raised".to_string(), value: raised }
                Stat { label: "Supporters".to_string(), value: supporters }
                Stat { label: "Trust score".to_string(), value: trust }
            }

            p {
                small { "Registration no. {reg_number}" }
                if let Some(website) = website {
                    br {}
                    a { href: "{website}", target: "_blank", rel: "noopener", "{website}" }
                }
            }

            if !ngo.achievements.is_empty() {
                Accordion {
                    title: "Achievements".to_string(),
                    ul {
                        for achievement in ngo.achievements.iter() {
                            li { "{achievement}" }
                        }
                    }
                }
            }

            if !ngo.team.is_empty() {
                Accordion {
                    title: "Team".to_string(),
                    ul {
                        for member in ngo.team.iter() {
                            li {
                                "{member.name}"
                                if let Some(role) = &member.role {
                                    " · {role}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
