//! The NGO record displayed by the verification card.

use serde::Deserialize;
use serde::Serialize;

/// A charitable organization as listed on Care4All.
///
/// Only `id` is mandatory. Every other field may be missing, and text fields
/// may also be present but blank. The two cases are kept apart in the type;
/// the accessors below collapse both to `None` for display purposes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ngo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    /// UPI virtual payment address, e.g. `name@ybl`.
    #[serde(default)]
    pub upi_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub founded_year: Option<u16>,
    /// Total donations received, in rupees.
    #[serde(default)]
    pub total_raised: Option<u64>,
    #[serde(default)]
    pub supporters: Option<u32>,
    /// 0..=100
    #[serde(default)]
    pub trust_score: Option<u8>,
    #[serde(default)]
    pub reg_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Treats a blank string the same as a missing one. Anything else is
/// returned as stored.
fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl Ngo {
    /// The stand-in record used when the card is opened without an NGO.
    pub fn fallback() -> Self {
        Self {
            id: "mock".to_string(),
            name: Some("Children First Foundation".to_string()),
            logo: Some(
                "https://images.unsplash.com/photo-1606092195730-5d7b9af1efc5?q=80&w=100&auto=format&fit=crop"
                    .to_string(),
            ),
            upi_id: Some("childrenfirst@ybl".to_string()),
            phone: Some("+91-9876543210".to_string()),
            email: Some("donate@childrenfirst.org".to_string()),
            website: Some("https://childrenfirst.org".to_string()),
            cover_image: Some("https://source.unsplash.com/random/800x600/?charity".to_string()),
            verified: Some(true),
            category: Some("Children".to_string()),
            location: Some("Mumbai, India".to_string()),
            images: Vec::new(),
            founded_year: Some(2010),
            total_raised: Some(5_000_000),
            supporters: Some(2500),
            trust_score: Some(92),
            reg_number: Some("NGO12345".to_string()),
            description: Some("A mock NGO description".to_string()),
            achievements: Vec::new(),
            team: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        filled(&self.name)
    }

    pub fn logo(&self) -> Option<&str> {
        filled(&self.logo)
    }

    pub fn upi_id(&self) -> Option<&str> {
        filled(&self.upi_id)
    }

    pub fn phone(&self) -> Option<&str> {
        filled(&self.phone)
    }

    pub fn email(&self) -> Option<&str> {
        filled(&self.email)
    }

    pub fn location(&self) -> Option<&str> {
        filled(&self.location)
    }

    pub fn website(&self) -> Option<&str> {
        filled(&self.website)
    }

    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_fully_populated() {
        let ngo = Ngo::fallback();
        assert_eq!(ngo.name(), Some("Children First Foundation"));
        assert_eq!(ngo.upi_id(), Some("childrenfirst@ybl"));
        assert_eq!(ngo.phone(), Some("+91-9876543210"));
        assert_eq!(ngo.email(), Some("donate@childrenfirst.org"));
        assert_eq!(ngo.location(), Some("Mumbai, India"));
        assert!(ngo.is_verified());
    }

    #[test]
    fn test_blank_and_missing_are_distinct_but_both_unavailable() {
        let blank: Ngo = serde_json::from_str(r#"{"id":"ngo42","upiId":""}"#).unwrap();
        let missing: Ngo = serde_json::from_str(r#"{"id":"ngo43"}"#).unwrap();

        assert_eq!(blank.upi_id, Some(String::new()));
        assert_eq!(missing.upi_id, None);
        assert_eq!(blank.upi_id(), None);
        assert_eq!(missing.upi_id(), None);
    }

    #[test]
    fn test_filled_values_are_not_rewritten() {
        let ngo = Ngo {
            id: "x7".to_string(),
            upi_id: Some(" x7@ybl ".to_string()),
            phone: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(ngo.upi_id(), Some(" x7@ybl "));
        assert_eq!(ngo.phone(), None);
    }

    #[test]
    fn test_camel_case_fields() {
        let ngo: Ngo = serde_json::from_str(
            r#"{"id":"x7","upiId":"x7@ybl","foundedYear":1999,"trustScore":80,"regNumber":"R1"}"#,
        )
        .unwrap();
        assert_eq!(ngo.upi_id(), Some("x7@ybl"));
        assert_eq!(ngo.founded_year, Some(1999));
        assert_eq!(ngo.trust_score, Some(80));
        assert_eq!(ngo.reg_number.as_deref(), Some("R1"));
        assert!(ngo.team.is_empty());
    }

    #[test]
    fn test_unverified_by_default() {
        let ngo = Ngo {
            id: "a".to_string(),
            ..Default::default()
        };
        assert!(!ngo.is_verified());
    }
}
