pub mod game_usecase;
pub mod graph_cache;

pub use game_usecase::{GameUseCase, MISSING_FIELDS, NewGame, ValidateRequest, WordValidation};
pub use graph_cache::GraphCache;
