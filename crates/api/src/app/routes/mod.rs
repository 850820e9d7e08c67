use axum::{routing::get, Router};

pub mod items;
pub mod system;

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const SEARCH: &str = "/search/";
pub const ITEMS: &str = "/items/";
pub const ITEM: &str = "/items/:item_id";

/// Every routed path template. The not-found fallback consults this to
/// decide whether adding or dropping a trailing slash would hit a route.
pub const ROUTE_TEMPLATES: [&str; 5] = [ROOT, HEALTH, SEARCH, ITEMS, ITEM];

/// Router for every item endpoint.
pub fn router() -> Router {
    Router::new()
        .route(ROOT, get(system::root))
        .route(HEALTH, get(system::health))
        .route(SEARCH, get(items::search_items))
        .route(ITEMS, get(items::list_items).post(items::create_item))
        .route(
            ITEM,
            get(items::read_item).put(items::update_item).delete(items::delete_item),
        )
}

/// Whether `path` matches one of [`ROUTE_TEMPLATES`] (any method).
pub fn is_routed(path: &str) -> bool {
    ROUTE_TEMPLATES
        .iter()
        .any(|template| template_matches(template, path))
}

/// `:name` segments match any non-empty segment; the rest must be equal.
fn template_matches(template: &str, path: &str) -> bool {
    let mut t = template.split('/');
    let mut p = path.split('/');
    loop {
        match (t.next(), p.next()) {
            (None, None) => return true,
            (Some(ts), Some(ps)) if ts.starts_with(':') => {
                if ps.is_empty() {
                    return false;
                }
            }
            (Some(ts), Some(ps)) if ts == ps => {}
            _ => return false,
        }
    }
}
