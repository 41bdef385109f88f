use matching_engine::MatchingEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: MatchingEngine,
}

impl AppState {
    pub fn new(engine: MatchingEngine) -> Self {
        Self { engine }
    }
}
