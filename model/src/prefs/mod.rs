pub mod card_prefs;
