use serde::{Deserialize, Serialize};

/// Structured author name as stored alongside a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The single display string exposed over the API.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_parts() {
        let author = Author::new("Ada", "Lovelace");
        assert_eq!(author.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_trims_missing_parts() {
        assert_eq!(Author::new("Ada", "").display_name(), "Ada");
        assert_eq!(Author::new("", "Lovelace").display_name(), "Lovelace");
        assert_eq!(Author::default().display_name(), "");
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let author: Author = serde_json::from_str(r#"{"firstName":"Grace"}"#).unwrap();
        assert_eq!(author, Author::new("Grace", ""));
    }
}
