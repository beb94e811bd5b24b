use thiserror::Error;

/// Startup / serving errors (request-level errors use `AppError`)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("绑定端口失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
