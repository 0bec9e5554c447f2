//! Typed shapes of the backend's listing endpoints.
//!
//! The backend is loosely typed and may omit fields or send extra ones
//! (`date`, `tags`). Missing fields default to empty values so a single
//! sloppy record renders as blank text instead of failing the whole list;
//! a payload that is not a list of objects fails the fetch outright.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumImage {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryImage {
    #[serde(default)]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let users: Vec<User> = serde_json::from_str(r#"[{"username":"ada"}]"#).unwrap();
        assert_eq!(users[0].username, "ada");
        assert_eq!(users[0].role, "");
    }

    #[test]
    fn extra_backend_fields_are_ignored() {
        let images: Vec<AlbumImage> =
            serde_json::from_str(r#"[{"path":"a.png","title":"A","date":"2024-01-01","tags":[]}]"#)
                .unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].path, "a.png");
    }

    #[test]
    fn non_list_payload_fails_fast() {
        assert!(serde_json::from_str::<Vec<Album>>(r#"{"error":"nope"}"#).is_err());
    }
}
