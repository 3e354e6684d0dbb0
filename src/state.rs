use crate::config::Config;
use crate::db::Store;

/// Application context handed to every handler.
///
/// Built once at startup and passed around explicitly; there is no
/// process-wide singleton behind it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    pub store: Store,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self { config, store })
    }
}
