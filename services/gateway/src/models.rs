use matching_engine::events::Bbo;
use serde::{Deserialize, Serialize};
use types::ids::Symbol;

/// Query string for endpoints keyed by symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolQuery {
    pub symbol: String,
}

/// Query string for the depth endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DepthQuery {
    pub symbol: String,
    #[serde(default = "default_levels")]
    pub levels: usize,
}

fn default_levels() -> usize {
    10
}

#[derive(Debug, Clone, Serialize)]
pub struct BboResponse {
    pub symbol: Symbol,
    pub bbo: Bbo,
}
