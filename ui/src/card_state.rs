//! Ephemeral view state of a verification card: load progress of its two
//! remote images and which field was copied most recently.

use std::rc::Rc;

use model::links;
use model::prefs::card_prefs::CardPrefs;
use model::Ngo;

use crate::actions::Resolved;
use crate::qr;

/// Fields the card can copy to the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIs)]
pub enum CopyField {
    #[strum(to_string = "UPI ID")]
    UpiId,
    Phone,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum LoadPhase {
    Loading,
    Loaded,
    /// The remote image failed and the placeholder is shown instead.
    /// Terminal, like `Loaded`; there is no retry.
    Failed,
}

/// Load state of one remote image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoad {
    source: String,
    placeholder: String,
    phase: LoadPhase,
}

impl ImageLoad {
    pub fn new(source: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            placeholder: placeholder.into(),
            phase: LoadPhase::Loading,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether the spinner should be hidden.
    pub fn is_loaded(&self) -> bool {
        !self.phase.is_loading()
    }

    /// The source the image element should currently display.
    pub fn src(&self) -> &str {
        match self.phase {
            LoadPhase::Failed => &self.placeholder,
            _ => &self.source,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The image element reported a successful load.
    ///
    /// Ignored once the image has settled, which covers the placeholder's
    /// own load event after a failure.
    pub fn on_load(&mut self) {
        if self.phase.is_loading() {
            self.phase = LoadPhase::Loaded;
        }
    }

    /// The image element reported a load failure.
    pub fn on_error(&mut self) {
        if self.phase.is_loading() {
            self.phase = LoadPhase::Failed;
        }
    }
}

/// An optional entity compared by reference, not by contents.
///
/// Two separately allocated records with equal fields are different
/// entities to the card.
#[derive(Clone, Debug, Default)]
pub struct EntityRef(Option<Rc<Ngo>>);

impl EntityRef {
    pub fn new(ngo: Option<Rc<Ngo>>) -> Self {
        Self(ngo)
    }

    pub fn get(&self) -> Option<&Rc<Ngo>> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<Rc<Ngo>> {
        self.0
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        same_entity(self.get(), other.get())
    }
}

fn same_entity(a: Option<&Rc<Ngo>>, b: Option<&Rc<Ngo>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Identifies one copy action so its delayed clear can tell whether it is
/// still the latest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyMarker {
    pub field: CopyField,
    ticket: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    /// The entity the state was built for; `None` in demo mode.
    source: Option<Rc<Ngo>>,
    pub logo: ImageLoad,
    pub qr: ImageLoad,
    copied: Option<CopyMarker>,
    next_ticket: u64,
    generation: u64,
}

impl CardView {
    pub fn new(resolved: &Resolved, prefs: &CardPrefs) -> Self {
        let record = resolved.record();
        Self {
            source: resolved.supplied().cloned(),
            logo: logo_image(record, prefs),
            qr: qr_image(record, prefs),
            copied: None,
            next_ticket: 0,
            generation: 0,
        }
    }

    /// Whether this state was built for `supplied`, compared by reference.
    pub fn is_current(&self, supplied: Option<&Rc<Ngo>>) -> bool {
        same_entity(self.source.as_ref(), supplied)
    }

    /// Back to "nothing loaded, nothing copied" for a new entity.
    ///
    /// The ticket counter is kept, so copy timers started before the reset
    /// cannot clear a marker set after it.
    pub fn reset(&mut self, resolved: &Resolved, prefs: &CardPrefs) {
        let next_ticket = self.next_ticket;
        let generation = self.generation + 1;
        *self = Self::new(resolved, prefs);
        self.next_ticket = next_ticket;
        self.generation = generation;
    }

    /// Bumped on every reset. Image elements are keyed by it so they are
    /// recreated, and fire a fresh load event, even when the new source
    /// equals the old one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mark_copied(&mut self, field: CopyField) -> CopyMarker {
        let marker = CopyMarker {
            field,
            ticket: self.next_ticket,
        };
        self.next_ticket += 1;
        self.copied = Some(marker);
        marker
    }

    /// Clears the copy indicator if `marker` is still the current one.
    /// Returns whether anything was cleared.
    pub fn clear_copied(&mut self, marker: CopyMarker) -> bool {
        if self.copied == Some(marker) {
            self.copied = None;
            true
        } else {
            false
        }
    }

    pub fn is_copied(&self, field: CopyField) -> bool {
        self.copied.is_some_and(|marker| marker.field == field)
    }

    pub fn copied_field(&self) -> Option<CopyField> {
        self.copied.map(|marker| marker.field)
    }
}

fn logo_image(record: &Ngo, prefs: &CardPrefs) -> ImageLoad {
    let placeholder = prefs.logo_placeholder.as_str();
    ImageLoad::new(record.logo().unwrap_or(placeholder), placeholder)
}

fn qr_image(record: &Ngo, prefs: &CardPrefs) -> ImageLoad {
    let upi_id = record.upi_id();
    ImageLoad::new(
        links::upi_qr_url(prefs, upi_id),
        qr::placeholder_src(&links::upi_payment_uri(upi_id)),
    )
}
