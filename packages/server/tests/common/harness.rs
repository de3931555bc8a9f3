//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container is shared by every test in the binary. Each test
//! gets its own freshly created database with migrations applied, so row
//! counts observed by one test are never disturbed by another.

use anyhow::{Context, Result};
use axum::Router;
use childcare_core::kernel::ServerDeps;
use childcare_core::server::build_app;
use childcare_core::Config;
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    base_url: String,
    // Keep container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let base_url = format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port);

        Ok(Self {
            base_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness owning an isolated, migrated database.
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let providers = Provider::find_all(&ctx.db_pool).await.unwrap();
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
    pub deps: ServerDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    /// Creates a new harness backed by a brand-new database.
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        // Each tokio::test has its own runtime, so the admin connection is
        // opened per test rather than shared.
        let admin_pool = PgPool::connect(&format!("{}/postgres", infra.base_url))
            .await
            .context("Failed to connect to Postgres")?;

        let db_name = format!("test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE DATABASE {}", db_name))
            .execute(&admin_pool)
            .await
            .context("Failed to create test database")?;
        admin_pool.close().await;

        let db_pool = PgPool::connect(&format!("{}/{}", infra.base_url, db_name))
            .await
            .context("Failed to connect to test database")?;

        let deps = ServerDeps::new(db_pool.clone());
        deps.run_migrations().await?;

        Ok(Self { db_pool, deps })
    }

    /// Full router wired to this harness's database
    #[allow(dead_code)]
    pub fn app(&self) -> Router {
        let config = Config {
            database_url: String::new(),
            port: 0,
            database_max_connections: 5,
            allowed_origins: vec![],
        };
        build_app(self.deps.clone(), &config)
    }
}
