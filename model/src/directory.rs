//! A small in-memory directory of NGOs bundled with the app for browsing and
//! previewing verification cards.

use crate::ModelError;
use crate::Ngo;
use std::collections::HashSet;
use std::rc::Rc;

const EMBEDDED_NGOS: &str = include_str!("../data/ngos.json");

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Directory(Vec<Rc<Ngo>>);

impl Directory {
    /// Loads the directory shipped with the app.
    pub fn embedded() -> Result<Self, ModelError> {
        Self::from_json(EMBEDDED_NGOS)
    }

    /// Parses a JSON array of NGO records. Ids must be unique.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let ngos: Vec<Ngo> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for ngo in &ngos {
            if !seen.insert(ngo.id.as_str()) {
                return Err(ModelError::DuplicateId(ngo.id.clone()));
            }
        }

        Ok(Self(ngos.into_iter().map(Rc::new).collect()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Ngo>> {
        self.0.iter()
    }

    /// Returns the shared record for `id`. The same `Rc` is handed out on
    /// every lookup.
    pub fn find(&self, id: &str) -> Option<Rc<Ngo>> {
        self.0.iter().find(|ngo| ngo.id == id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_directory_loads() {
        let directory = Directory::embedded().unwrap();
        assert!(!directory.is_empty());

        let ngo = directory.find("ngo42").unwrap();
        assert_eq!(ngo.upi_id, Some(String::new()));
        assert_eq!(ngo.upi_id(), None);
    }

    #[test]
    fn test_find_returns_shared_record() {
        let directory = Directory::embedded().unwrap();
        let a = directory.find("x7").unwrap();
        let b = directory.find("x7").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(directory.find("nope").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Directory::from_json(r#"[{"id":"a"},{"id":"a"}]"#).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Directory::from_json(r#"[{"name":"no id"}]"#).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
