use anyhow::{anyhow, Result};
use basket_algorithms::dispatch;
use basket_challenges::{Catalog, CatalogError};
use basket_structs::{
    api::{ErrorResp, OptimizeReq},
    config::ServerConfig,
};
use std::{
    net::{IpAddr, SocketAddr},
    path::Path,
    sync::Arc,
};
use tracing::{error, info, warn};
use warp::{
    http::StatusCode,
    reply::{json, with_status, Json, WithStatus},
    Filter, Rejection, Reply,
};

/// The grocery table, or the json catalog at `path` when one is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)?;
            info!("loaded {} items from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::grocery()),
    }
}

pub fn routes(
    catalog: Arc<Catalog>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_catalog = warp::any().map(move || Arc::clone(&catalog));

    let index = warp::path::end()
        .and(warp::get())
        .and(with_catalog.clone())
        .map(|catalog: Arc<Catalog>| json(&*catalog));

    let optimize = warp::path!("optimize")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_catalog.clone())
        .and_then(handle_optimize);

    let get_item = warp::path!("item" / u32)
        .and(warp::get())
        .and(with_catalog)
        .map(handle_get_item);

    index.or(optimize).or(get_item)
}

async fn handle_optimize(
    req: OptimizeReq,
    catalog: Arc<Catalog>,
) -> Result<WithStatus<Json>, Rejection> {
    info!(
        "optimize request: algorithm {}, max_weight {}, max_price {}",
        req.algorithm, req.max_weight, req.max_price
    );
    // Each search owns its visited set or memo table; only the catalog is shared.
    match tokio::task::spawn_blocking(move || dispatch(&catalog, &req)).await {
        Ok(selections) => {
            info!("returning {} selections", selections.len());
            Ok(with_status(json(&selections), StatusCode::OK))
        }
        Err(e) => {
            error!("search task failed: {}", e);
            Ok(with_status(
                json(&ErrorResp::new("Search failed")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

fn handle_get_item(id: u32, catalog: Arc<Catalog>) -> WithStatus<Json> {
    match catalog.get(id) {
        Ok(item) => with_status(json(item), StatusCode::OK),
        Err(e @ CatalogError::ItemNotFound(_)) => {
            warn!("item {} not found", id);
            with_status(json(&ErrorResp::new(e)), StatusCode::NOT_FOUND)
        }
        Err(e) => with_status(json(&ErrorResp::new(e)), StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub fn bind_address(config: &ServerConfig) -> Result<SocketAddr> {
    let ip = config
        .host
        .parse::<IpAddr>()
        .map_err(|e| anyhow!("Invalid host {:?}: {}", config.host, e))?;
    Ok(SocketAddr::new(ip, config.port))
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = bind_address(&config)?;
    let catalog = Arc::new(load_catalog(config.catalog_path().map(|p| p.as_path()))?);
    info!("serving {} items on {}", catalog.len(), addr);
    warp::serve(routes(catalog)).run(addr).await;
    Ok(())
}
