//! # Student Service サーバー
//!
//! 学生レコードの一覧・取得・登録を提供する REST API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,pathshala=debug`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//!
//! カレントディレクトリに `.env` があれば起動時に読み込む（環境変数が優先）。
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/pathshala cargo run -p pathshala-student-service
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use pathshala_infra::{db, repository::PostgresStudentRepository};
use pathshala_shared::observability::{TracingConfig, init_tracing};
use pathshala_student_service::{
    build_app,
    config::AppConfig,
    handler::StudentState,
    usecase::StudentUseCaseImpl,
};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "student-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env はトレーシング初期化より先に読み込む
    let config = AppConfig::load()?;

    let tracing_config = TracingConfig::from_env(SERVICE_NAME);
    init_tracing(&tracing_config);
    tracing::debug!(?config, "設定を読み込みました");

    let addr = config.bind_addr()?;
    let database_url = config.require_database_url()?;

    tracing::info!(
        service = %tracing_config.service_name,
        "Student Service サーバーを起動します: {}",
        addr
    );

    let pool = db::create_pool(database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの適用に失敗しました")?;

    let student_repository = Arc::new(PostgresStudentRepository::new(pool));
    let student_state = Arc::new(StudentState {
        usecase: StudentUseCaseImpl::new(student_repository),
    });

    let app = build_app(student_state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Student Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
