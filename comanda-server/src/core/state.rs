//! Server State
//!
//! Everything a handler can reach, cheap to clone.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::models::Station;
use tokio_util::sync::CancellationToken;

use crate::auth::AccountService;
use crate::catalog::CatalogService;
use crate::composer::{FeedOrderSink, TableRegistry};
use crate::core::{Config, Result, ServerError};
use crate::feed::FeedStore;
use crate::views::StationView;

/// 服务器状态 - 持有所有服务的共享引用
///
/// | 字段 | 说明 |
/// |------|------|
/// | feed | 文档 feed (菜单、分类、区域、订单) |
/// | catalog | 菜单管理 |
/// | tables | 桌台及点单会话 |
/// | accounts | 员工账号 |
/// | shutdown | 关闭信号, 结束长连接 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub feed: FeedStore,
    pub catalog: CatalogService,
    pub tables: Arc<TableRegistry>,
    pub accounts: AccountService,
    pub shutdown: CancellationToken,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 创建内存 feed
    /// 2. 创建各服务, 桌台 1..=initial_tables
    /// 3. 配置了 ADMIN_EMAIL / ADMIN_PASSWORD 时创建管理员
    pub fn initialize(config: &Config) -> Result<Self> {
        let feed = FeedStore::with_capacity(config.feed_channel_capacity);
        let catalog = CatalogService::new(feed.clone());
        let sink = Arc::new(FeedOrderSink::new(feed.clone()));
        let tables = Arc::new(TableRegistry::new(config.initial_tables, sink));
        let accounts = AccountService::new();

        if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
            match accounts.bootstrap_admin(email, password) {
                Ok(Some(account)) => {
                    tracing::info!(uid = %account.uid, "Bootstrap administrator created");
                }
                Ok(None) => {}
                Err(e) => {
                    return Err(ServerError::Config(format!(
                        "Invalid bootstrap administrator: {}",
                        e.message
                    )));
                }
            }
        }

        tracing::info!(tables = config.initial_tables, "Server state initialized");
        Ok(Self {
            config: config.clone(),
            feed,
            catalog,
            tables,
            accounts,
            shutdown: CancellationToken::new(),
            started_at: Utc::now(),
        })
    }

    /// View for a station, with section labels from config
    pub fn station_view(&self, station: Station) -> StationView {
        StationView::for_station(station, &self.config)
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
