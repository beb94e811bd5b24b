//! Comanda Server - 餐厅点单系统
//!
//! # 架构概述
//!
//! - **文档 feed** (`feed`): 内存 JSON 树, 路径读写, 变更订阅
//! - **菜单** (`catalog`): 菜品、分类、出品区域, 分组菜单
//! - **点单** (`composer`): 桌台会话, 人员名单, 数量和备注, 提交订单
//! - **出品视图** (`views`): 厨房 / 咖啡吧按区域过滤的订单行
//! - **账号** (`auth`): Argon2 密码, 角色决定落地页
//! - **HTTP API** (`api`): axum 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── feed/          # 文档 feed
//! ├── catalog/       # 菜单管理
//! ├── composer/      # 点单状态机
//! ├── views/         # 出品视图
//! ├── auth/          # 账号
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod composer;
pub mod core;
pub mod feed;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use catalog::{CatalogService, CatalogSnapshot, MenuGroup};
pub use composer::{Direction, OrderComposer, OrderSink, TableRegistry, TableSession};
pub use crate::core::{Config, Server, ServerState};
pub use feed::{FeedStore, FeedSubscription};
pub use utils::{AppError, AppResult};
pub use views::{StationView, UnresolvedDish};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env, 初始化日志
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    if let Err(e) = dotenv::dotenv() {
        // A missing .env is normal outside development
        if !e.not_found() {
            return Err(e.into());
        }
    }
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  ____                                _
 / ___|___  _ __ ___   __ _ _ __   __| | __ _
| |   / _ \| '_ ` _ \ / _` | '_ \ / _` |/ _` |
| |__| (_) | | | | | | (_| | | | | (_| | (_| |
 \____\___/|_| |_| |_|\__,_|_| |_|\__,_|\__,_|
    "#
    );
}
