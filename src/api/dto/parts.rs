/*
 * Responsibility
 * - Parts の request DTO (response は repos::Part をそのまま返す)
 * - validation (形式チェック) は store に触れる前に validate() で行う
 */
use serde::Deserialize;

use crate::repos::NewPart;

pub const NAME_MAX_LEN: usize = 255;
pub const CODE_MAX_LEN: usize = 64;

/// Body of POST /parts and PUT /parts/{id}.
///
/// `id` is accepted so clients can send back what they read, but it never
/// reaches the store: create ignores it and edit uses the path id.
#[derive(Debug, Deserialize)]
pub struct PartRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl PartRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("name is required");
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err("name must be <= 255 chars");
        }
        if let Some(code) = &self.code {
            if code.trim().is_empty() {
                return Err("code cannot be empty");
            }
            if code.chars().count() > CODE_MAX_LEN {
                return Err("code must be <= 64 chars");
            }
        }

        Ok(())
    }

    pub fn into_new_part(self) -> NewPart {
        NewPart {
            name: self.name.trim().to_string(),
            code: self.code.map(|c| c.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, code: Option<&str>) -> PartRequest {
        PartRequest {
            id: None,
            name: name.into(),
            code: code.map(Into::into),
        }
    }

    #[test]
    fn accepts_name_only() {
        assert_eq!(req("bolt", None).validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_or_oversized_fields() {
        assert_eq!(req("   ", None).validate(), Err("name is required"));
        assert_eq!(
            req(&"x".repeat(NAME_MAX_LEN + 1), None).validate(),
            Err("name must be <= 255 chars")
        );
        assert_eq!(req("bolt", Some("")).validate(), Err("code cannot be empty"));
        assert_eq!(
            req("bolt", Some(&"c".repeat(CODE_MAX_LEN + 1))).validate(),
            Err("code must be <= 64 chars")
        );
    }

    #[test]
    fn payload_id_is_dropped() {
        let body: PartRequest =
            serde_json::from_str(r#"{"id":99,"name":" bolt ","code":"B-1"}"#).unwrap();

        assert_eq!(body.id, Some(99));
        assert_eq!(
            body.into_new_part(),
            NewPart {
                name: "bolt".into(),
                code: Some("B-1".into()),
            }
        );
    }
}
