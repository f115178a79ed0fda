//! Core application

use std::sync::Arc;

use anyhow::Result;

use crate::api::ApiServer;
use crate::core::cli;
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::core::storage::{AppStorage, DataSubdir};
use crate::data::SqliteService;
use crate::vault::{MagicClassifier, PlainVault, Vault};

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub storage: AppStorage,
    pub vault: Arc<dyn Vault>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let cli = cli::parse();
        let app = Self::init(AppConfig::load(&cli)).await?;
        Self::start_server(app).await
    }

    /// Wire the vault from configuration
    ///
    /// Construction order matters: storage directories first, then the
    /// metadata index, then the vault over both.
    pub async fn init(config: AppConfig) -> Result<Self> {
        let storage = AppStorage::init(&config).await?;

        let db = Arc::new(
            SqliteService::init(&storage)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize metadata index: {}", e))?,
        );

        let vault: Arc<dyn Vault> = Arc::new(PlainVault::new(
            storage.subdir(DataSubdir::Vault),
            db,
            Arc::new(MagicClassifier),
        ));

        let shutdown = ShutdownService::new(vault.clone());

        Ok(Self {
            shutdown,
            config,
            storage,
            vault,
        })
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers FIRST (before any blocking calls)
        app.shutdown.install_signal_handlers();

        let server = ApiServer::new(app);
        let app = server.start().await?;
        app.shutdown.shutdown().await;

        Ok(())
    }
}
