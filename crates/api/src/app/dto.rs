use serde::Serialize;

use itemdesk_core::{Item, ItemId};

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters of `/search/`.
#[derive(Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Build from decoded `key=value` pairs. A repeated `q` keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .filter(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .last();
        Self { q }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize, PartialEq)]
pub struct ItemIdResponse {
    pub item_id: ItemId,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SearchResponse {
    /// Serialized as `null` when the query string had no `q`.
    pub query: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ItemListResponse {
    pub items: Vec<&'static str>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CreatedItemResponse {
    pub name: String,
    pub price: f64,
}

impl From<Item> for CreatedItemResponse {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            price: item.price,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct UpdatedItemResponse {
    pub item_name: String,
    pub item_id: ItemId,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DeletedItemResponse {
    pub item_id: ItemId,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn search_query_keeps_last_q() {
        let query = SearchQuery::from_pairs(pairs(&[("q", "a"), ("page", "2"), ("q", "b")]));
        assert_eq!(query.q.as_deref(), Some("b"));
    }

    #[test]
    fn search_query_without_q_is_empty() {
        assert_eq!(SearchQuery::from_pairs(pairs(&[("page", "2")])), SearchQuery::default());
        assert_eq!(SearchQuery::from_pairs(Vec::new()), SearchQuery::default());
    }

    #[test]
    fn absent_query_serializes_as_null() {
        let body = serde_json::to_value(SearchResponse { query: None }).unwrap();
        assert_eq!(body, json!({ "query": null }));
    }

    #[test]
    fn created_item_drops_optional_fields() {
        let item = Item::new("Book", 9.99).with_description("paperback").with_tax(0.5);
        let body = serde_json::to_value(CreatedItemResponse::from(item)).unwrap();
        assert_eq!(body, json!({ "name": "Book", "price": 9.99 }));
    }

    #[test]
    fn field_order_follows_declaration() {
        let body = serde_json::to_string(&DeletedItemResponse {
            item_id: ItemId::new(5),
            deleted: true,
        })
        .unwrap();
        assert_eq!(body, r#"{"item_id":5,"deleted":true}"#);
    }
}
