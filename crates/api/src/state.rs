/// Shared by every handler through `State<AppState>`; cloning shares the pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: folio_db::DbPool,
}
