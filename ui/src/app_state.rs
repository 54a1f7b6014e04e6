use model::prefs::card_prefs::CardPrefs;
use model::Directory;
use std::ops::Deref;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub directory: Directory,
    pub card_prefs: CardPrefs,
}

/// Immutable application state shared through the Dioxus context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(directory: Directory, card_prefs: CardPrefs) -> Self {
        Self(Rc::new(AppStateData {
            directory,
            card_prefs,
        }))
    }
}
