pub mod resources;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::ResourceKind;

pub use resources::SharedService;

/// A resource kind this binary can serve; with `fixtures` it must also
/// generate synthetic inputs.
#[cfg(not(feature = "fixtures"))]
pub trait Deployable: ResourceKind {}
#[cfg(not(feature = "fixtures"))]
impl<K: ResourceKind> Deployable for K {}

#[cfg(feature = "fixtures")]
pub trait Deployable: service::fixtures::Synthetic {}
#[cfg(feature = "fixtures")]
impl<K: service::fixtures::Synthetic> Deployable for K {}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// CRUD routes of `K`, mounted with and without the trailing slash on the collection.
fn resource_routes<K: Deployable>() -> Router<SharedService<K>> {
    let collection = format!("/{}", K::COLLECTION);
    let item = if K::ITEM_READ {
        get(resources::read::<K>).put(resources::update::<K>).delete(resources::remove::<K>)
    } else {
        put(resources::update::<K>).delete(resources::remove::<K>)
    };

    let router = Router::new()
        .route(&collection, get(resources::list::<K>).post(resources::create::<K>))
        .route(&format!("{collection}/"), get(resources::list::<K>).post(resources::create::<K>))
        .route(&format!("{collection}/:id"), item);

    #[cfg(feature = "fixtures")]
    let router = router.route(&format!("/fake_{}/:count", K::COLLECTION), get(resources::seed::<K>));

    router
}

/// Build the application router for one deployment.
pub fn build_router<K: Deployable>(svc: SharedService<K>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(resource_routes::<K>().with_state(svc))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
