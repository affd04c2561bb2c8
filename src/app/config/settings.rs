//! 分页配置
//!
//! 配置以 TOML 文件提供，所有字段都有默认值：
//!
//! ```toml
//! style = "digg"
//! frame_size = 8
//! per_page = 10
//! allow_per_page_override = true
//! max_per_page = 100
//! disallowed_per_page = [13]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::error::types::{PagerError, PagerResult};
use crate::core::window::{CalculatorConfig, Style, DEFAULT_FRAME_SIZE};

/// 默认每页数量
pub const DEFAULT_PER_PAGE: u32 = 10;

/// 默认的条目列表键名
pub const DEFAULT_OBJECT_LIST: &str = "object_list";

/// 配置文件相对于用户配置目录的路径
const CONFIG_FILE: &str = "page-window/config.toml";

/// 分页配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationSettings {
    /// 样式名称，在构造时校验
    pub style: String,
    pub frame_size: u32,
    pub per_page: u32,
    /// 处理函数输出中条目列表的键名
    pub object_list: String,
    /// 是否允许请求覆盖每页数量
    pub allow_per_page_override: bool,
    pub max_per_page: Option<u32>,
    pub disallowed_per_page: Vec<u32>,
    /// 翻页链接的锚点
    pub anchor: Option<String>,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            style: Style::default().to_string(),
            frame_size: DEFAULT_FRAME_SIZE,
            per_page: DEFAULT_PER_PAGE,
            object_list: DEFAULT_OBJECT_LIST.to_string(),
            allow_per_page_override: false,
            max_per_page: None,
            disallowed_per_page: Vec::new(),
            anchor: None,
        }
    }
}

impl PaginationSettings {
    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(content: &str) -> PagerResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> PagerResult<Self> {
        let path = path.as_ref().absolutize()?.into_owned();
        let content = fs::read_to_string(&path)?;
        let settings = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            style = %settings.style,
            frame_size = settings.frame_size,
            per_page = settings.per_page,
            "loaded pagination settings"
        );
        Ok(settings)
    }

    /// 从默认位置加载，文件不存在时使用默认配置
    pub fn load_default() -> PagerResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// 解析样式名称
    pub fn style(&self) -> PagerResult<Style> {
        self.style.parse()
    }

    /// 校验配置
    pub fn validate(&self) -> PagerResult<()> {
        self.style()?;
        if self.frame_size == 0 {
            return Err(PagerError::InvalidFrameSize(self.frame_size));
        }
        if self.per_page == 0 {
            return Err(PagerError::InvalidPerPage(self.per_page));
        }
        Ok(())
    }

    /// 请求中的每页数量是否可接受
    pub fn accepts_per_page(&self, per_page: u32) -> bool {
        per_page > 0
            && self.max_per_page.map_or(true, |max| per_page <= max)
            && !self.disallowed_per_page.contains(&per_page)
    }

    /// 计算器配置
    pub fn calculator_config(&self) -> PagerResult<CalculatorConfig> {
        Ok(CalculatorConfig {
            style: self.style()?,
            frame_size: self.frame_size,
        })
    }
}
