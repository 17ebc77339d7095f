use ft_auth::AuthClient;
use ft_config::Config;
use ft_db::{MemoryUserStore, SqliteUserStore, UserStore};
use ft_session::{
    GetCurrentUserUseCase, HomeUseCase, LoginUseCase, LogoutUseCase, UserRepository,
};

use std::error::Error;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Application context owned by the process entry point.
///
/// Every dependency is constructed here once and passed down explicitly;
/// there is no container.
pub struct AppContext {
    pub login: LoginUseCase,
    pub get_current_user: GetCurrentUserUseCase,
    pub home: HomeUseCase,
    pub logout: LogoutUseCase,
}

impl AppContext {
    pub async fn init(config: &Config) -> Result<Self, Box<dyn Error>> {
        let store: Arc<dyn UserStore> = if config.database.in_memory {
            info!("Using transient in-memory user store");
            Arc::new(MemoryUserStore::new())
        } else {
            let database_path = config.database_path()?;
            info!("Connecting to database: {}", database_path.display());

            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(
                    SqliteConnectOptions::new()
                        .filename(&database_path)
                        .create_if_missing(true)
                        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                        .busy_timeout(std::time::Duration::from_secs(5)),
                )
                .await?;

            sqlx::migrate!("../ft-db/migrations").run(&pool).await?;

            Arc::new(SqliteUserStore::new(pool).await?)
        };

        let auth_client = AuthClient::new(&config.api)?;
        let repository = Arc::new(UserRepository::new(auth_client, store));

        Ok(Self {
            login: LoginUseCase::new(repository.clone()),
            get_current_user: GetCurrentUserUseCase::new(repository.clone()),
            home: HomeUseCase::new(GetCurrentUserUseCase::new(repository.clone())),
            logout: LogoutUseCase::new(repository),
        })
    }
}
