//! What the verification card's buttons do.
//!
//! Each action returns the side effects to perform as [`CardEffect`]s; the
//! component runs them against the clipboard, router, browser and toast
//! channel. Keeping the decisions here makes them testable without a DOM.

use std::rc::Rc;

use model::links;
use model::Ngo;

use crate::card_state::CardView;
use crate::card_state::CopyField;
use crate::card_state::CopyMarker;
use crate::toast::Toast;

/// The record the card renders.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    /// The caller supplied this entity; it is shown verbatim.
    Supplied(Rc<Ngo>),
    /// Nothing was supplied; the built-in fallback is shown.
    Demo(Rc<Ngo>),
}

impl Resolved {
    /// Picks the supplied entity, or builds the fallback only if there is none.
    pub fn from_supplied(ngo: Option<Rc<Ngo>>) -> Self {
        match ngo {
            Some(ngo) => Self::Supplied(ngo),
            None => Self::Demo(Rc::new(Ngo::fallback())),
        }
    }

    pub fn record(&self) -> &Rc<Ngo> {
        match self {
            Self::Supplied(ngo) | Self::Demo(ngo) => ngo,
        }
    }

    pub fn supplied(&self) -> Option<&Rc<Ngo>> {
        match self {
            Self::Supplied(ngo) => Some(ngo),
            Self::Demo(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardEffect {
    Notify(Toast),
    WriteClipboard { field: CopyField, text: String },
    /// Clear the copy indicator after the feedback delay, if still current.
    ScheduleClear(CopyMarker),
    /// Open a URL outside the app, in a new browsing context.
    OpenExternal(String),
    /// Go to the in-app profile of the NGO with this id.
    Navigate { id: String },
    Close,
}

/// Starts copying `value` to the clipboard.
pub fn copy(field: CopyField, value: Option<&str>) -> Vec<CardEffect> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(text) => vec![CardEffect::WriteClipboard {
            field,
            text: text.to_string(),
        }],
        None => vec![CardEffect::Notify(Toast::error(format!(
            "No {field} available to copy"
        )))],
    }
}

/// Completes a copy once the clipboard reported the outcome of the write.
pub fn copy_finished(view: &mut CardView, field: CopyField, written: bool) -> Vec<CardEffect> {
    if written {
        let marker = view.mark_copied(field);
        vec![
            CardEffect::ScheduleClear(marker),
            CardEffect::Notify(Toast::success(format!("{field} copied to clipboard!"))),
        ]
    } else {
        vec![CardEffect::Notify(Toast::error(format!(
            "Could not copy {field} to clipboard"
        )))]
    }
}

/// Hands the phone number off to WhatsApp.
pub fn message(record: &Ngo) -> Vec<CardEffect> {
    match record.phone().and_then(links::whatsapp_link) {
        Some(link) => vec![CardEffect::OpenExternal(link)],
        None => vec![CardEffect::Notify(Toast::error("Phone number not available"))],
    }
}

/// "View on Care4All". A supplied entity is opened in its profile and the
/// overlay closed; the demo card has no profile to go to.
pub fn view_profile(resolved: &Resolved, closable: bool) -> Vec<CardEffect> {
    match resolved.supplied() {
        Some(ngo) => {
            let mut effects = vec![CardEffect::Navigate { id: ngo.id.clone() }];
            if closable {
                effects.push(CardEffect::Close);
            }
            effects
        }
        None => vec![CardEffect::Notify(Toast::success(
            "Redirecting to NGO profile on Care4All",
        ))],
    }
}

/// "Report Incorrect Information". Only acknowledged; nothing is submitted.
pub fn report() -> Vec<CardEffect> {
    vec![CardEffect::Notify(Toast::success(
        "Report submitted. Our team will review the information.",
    ))]
}
