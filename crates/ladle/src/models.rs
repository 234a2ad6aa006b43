//! Recipe document model

use bson::oid::ObjectId;
use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

/// Recipe document
///
/// Only the three lookup keys are named; everything else the client sends
/// (ingredients, prep time, instructions, ...) is persisted opaquely in
/// `extra` and round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Recipe {
    /// Render for an HTTP response: id as its hex string, extras flattened
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        if let Some(id) = &self.id {
            body.insert("id".to_string(), serde_json::json!(id.to_hex()));
        }
        if let Some(title) = &self.title {
            body.insert("title".to_string(), serde_json::json!(title));
        }
        if let Some(author) = &self.author {
            body.insert("author".to_string(), serde_json::json!(author));
        }
        if let Some(difficulty) = &self.difficulty {
            body.insert("difficulty".to_string(), serde_json::json!(difficulty));
        }
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone().into_relaxed_extjson());
        }
        serde_json::Value::Object(body)
    }
}

/// Convert a JSON object into a BSON document for the store.
///
/// Returns `None` when the value is not an object and therefore cannot
/// become a document.
pub fn json_to_document(value: &serde_json::Value) -> Option<Document> {
    match Bson::try_from(value.clone()).ok()? {
        Bson::Document(doc) => Some(doc),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn extras_survive_a_bson_round_trip() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "title": "Pancakes",
            "author": "Ana",
            "difficulty": "Easy",
            "ingredients": ["flour", "milk", "eggs"],
            "prepTimeInMinutes": 10,
        };

        let recipe: Recipe = bson::from_document(stored).unwrap();
        assert_eq!(recipe.title.as_deref(), Some("Pancakes"));
        assert_eq!(
            recipe.extra.get_array("ingredients").unwrap().len(),
            3
        );
        assert_eq!(recipe.extra.get_i32("prepTimeInMinutes").unwrap(), 10);

        let back = bson::to_document(&recipe).unwrap();
        assert!(back.contains_key("_id"));
        assert!(back.contains_key("ingredients"));
    }

    #[test]
    fn to_json_renders_id_as_hex() {
        let id = ObjectId::new();
        let recipe = Recipe {
            id: Some(id),
            title: Some("Omelette".to_string()),
            author: Some("Ana".to_string()),
            difficulty: Some("Easy".to_string()),
            extra: doc! { "servings": 2 },
        };

        let json = recipe.to_json();
        assert_eq!(json["id"], serde_json::json!(id.to_hex()));
        assert_eq!(json["title"], serde_json::json!("Omelette"));
        assert_eq!(json["servings"], serde_json::json!(2));
    }

    #[test]
    fn missing_lookup_keys_are_omitted() {
        let recipe: Recipe = bson::from_document(doc! { "note": "untitled" }).unwrap();
        assert!(recipe.title.is_none());

        let json = recipe.to_json();
        assert!(json.get("title").is_none());
        assert_eq!(json["note"], serde_json::json!("untitled"));
    }

    #[test]
    fn json_to_document_rejects_non_objects() {
        assert!(json_to_document(&serde_json::json!(["not", "an", "object"])).is_none());
        assert!(json_to_document(&serde_json::json!("plain string")).is_none());

        let doc = json_to_document(&serde_json::json!({ "title": "Soup" })).unwrap();
        assert_eq!(doc.get_str("title").unwrap(), "Soup");
    }
}
