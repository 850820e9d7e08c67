use axum::Json;

use crate::app::dto::{
    CreatedItemResponse, DeletedItemResponse, ItemIdResponse, ItemListResponse, SearchQuery,
    SearchResponse, UpdatedItemResponse,
};
use crate::app::extract::{ItemBody, ItemIdPath, ValidQuery};

/// Fixed listing; there is no item store behind it.
const LISTED_ITEMS: [&str; 2] = ["Item1", "Item2"];

pub async fn list_items() -> Json<ItemListResponse> {
    Json(ItemListResponse {
        items: LISTED_ITEMS.to_vec(),
    })
}

pub async fn read_item(ItemIdPath(item_id): ItemIdPath) -> Json<ItemIdResponse> {
    Json(ItemIdResponse { item_id })
}

pub async fn search_items(ValidQuery(pairs): ValidQuery<Vec<(String, String)>>) -> Json<SearchResponse> {
    let query = SearchQuery::from_pairs(pairs);
    Json(SearchResponse { query: query.q })
}

pub async fn create_item(ItemBody(item): ItemBody) -> Json<CreatedItemResponse> {
    tracing::debug!(name = %item.name, price = item.price, "item accepted");
    Json(CreatedItemResponse::from(item))
}

// Path extractors must precede the body extractor.
pub async fn update_item(
    ItemIdPath(item_id): ItemIdPath,
    ItemBody(item): ItemBody,
) -> Json<UpdatedItemResponse> {
    tracing::debug!(%item_id, name = %item.name, "item update accepted");
    Json(UpdatedItemResponse {
        item_name: item.name,
        item_id,
    })
}

pub async fn delete_item(ItemIdPath(item_id): ItemIdPath) -> Json<DeletedItemResponse> {
    tracing::debug!(%item_id, "item delete accepted");
    Json(DeletedItemResponse {
        item_id,
        deleted: true,
    })
}
