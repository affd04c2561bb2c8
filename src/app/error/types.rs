//! 错误类型定义

use thiserror::Error;

/// 分页错误类型
#[derive(Error, Debug)]
pub enum PagerError {
    /// 当前页不在 `[1, total_pages]` 内
    #[error("Page {page} out of range (total pages: {total_pages})")]
    OutOfRange { page: u32, total_pages: u32 },

    #[error("Invalid pagination style: {0}")]
    InvalidStyle(String),

    #[error("Invalid frame size: {0}")]
    InvalidFrameSize(u32),

    #[error("Invalid per page: {0}")]
    InvalidPerPage(u32),

    /// 处理函数输出中缺少条目列表
    #[error("Missing object list: {0}")]
    MissingObjectList(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagerError {
    /// 对应的 HTTP 状态码：越界为 404，其余均为配置错误
    pub fn status_code(&self) -> u16 {
        match self {
            Self::OutOfRange { .. } => 404,
            _ => 500,
        }
    }

    /// 是否为“页面不存在”
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<toml::de::Error> for PagerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// 分页库结果类型
pub type PagerResult<T> = std::result::Result<T, PagerError>;

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
