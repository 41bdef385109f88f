use crate::error::AppError;
use crate::models::{BboResponse, DepthQuery, SymbolQuery};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use matching_engine::events::DepthSnapshot;
use matching_engine::MAX_DEPTH;
use types::ids::Symbol;

/// `GET /bbo?symbol=` — best bid and offer. Unknown symbols yield nulls.
pub async fn get_bbo(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Json<BboResponse> {
    let symbol = Symbol::new(query.symbol);
    let bbo = state.engine.bbo(&symbol);
    Json(BboResponse { symbol, bbo })
}

/// `GET /depth?symbol=&levels=` — aggregated depth, up to `MAX_DEPTH`
/// levels per side. Unknown symbols yield empty sides.
pub async fn get_depth(
    State(state): State<AppState>,
    Query(query): Query<DepthQuery>,
) -> Result<Json<DepthSnapshot>, AppError> {
    if query.levels == 0 || query.levels > MAX_DEPTH {
        return Err(AppError::BadRequest(format!(
            "levels must be between 1 and {MAX_DEPTH}"
        )));
    }

    let symbol = Symbol::new(query.symbol);
    Ok(Json(state.engine.depth(&symbol, query.levels)))
}
