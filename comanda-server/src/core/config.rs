/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (none) | 日志目录, 设置后按天滚动写文件 |
/// | FEED_CHANNEL_CAPACITY | 1024 | 变更通知广播容量 |
/// | INITIAL_TABLES | 3 | 启动时的桌台数量 |
/// | KITCHEN_SECTION | Cocina | 厨房视图匹配的 section |
/// | CAFETERIA_SECTION | Cafetería | 咖啡吧视图匹配的 section |
/// | ADMIN_EMAIL / ADMIN_PASSWORD | (none) | 启动时创建的管理员账号 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 INITIAL_TABLES=10 cargo run -p comanda-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Feed 变更广播通道容量
    pub feed_channel_capacity: usize,
    pub initial_tables: u32,
    /// Section label routed to the kitchen view
    pub kitchen_section: String,
    /// Section label routed to the cafeteria view
    pub cafeteria_section: String,
    /// 引导管理员账号 (两者都设置时生效)
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

pub const DEFAULT_KITCHEN_SECTION: &str = "Cocina";
pub const DEFAULT_CAFETERIA_SECTION: &str = "Cafetería";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            feed_channel_capacity: std::env::var("FEED_CHANNEL_CAPACITY")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(1024),
            initial_tables: std::env::var("INITIAL_TABLES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3),
            kitchen_section: std::env::var("KITCHEN_SECTION")
                .unwrap_or_else(|_| DEFAULT_KITCHEN_SECTION.into()),
            cafeteria_section: std::env::var("CAFETERIA_SECTION")
                .unwrap_or_else(|_| DEFAULT_CAFETERIA_SECTION.into()),
            admin_email: std::env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
        }
    }

    /// 测试用配置: 不读环境变量, 全部默认值
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            environment: "test".into(),
            log_level: "debug".into(),
            log_dir: None,
            feed_channel_capacity: 64,
            initial_tables: 3,
            kitchen_section: DEFAULT_KITCHEN_SECTION.into(),
            cafeteria_section: DEFAULT_CAFETERIA_SECTION.into(),
            admin_email: None,
            admin_password: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
