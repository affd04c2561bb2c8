//! 包装处理函数，为其输出的上下文添加分页信息
//!
//! 处理函数返回 [`HandlerOutput::Context`] 时，条目列表位于配置的
//! `object_list` 键下。中间件按请求参数截取当前页，
//! 并把分页视图合并进上下文。其他输出原样返回。
//!
//! [`VIEW_KEYS`] 中的键由中间件保留：处理函数写入的同名值会先被移除，
//! 再写入本次计算的结果。

use serde_json::{Map, Value};
use tracing::debug;

use crate::app::config::settings::PaginationSettings;
use crate::app::error::types::{PagerError, PagerResult};
use crate::core::paginate::Paginator;
use crate::core::query::{PageParams, QueryParams};
use crate::core::window::PageWindowCalculator;

/// 分页视图写入上下文时使用的键
pub const VIEW_KEYS: [&str; 7] = [
    "style",
    "previous_page",
    "next_page",
    "left_page_numbers",
    "middle_page_numbers",
    "right_page_numbers",
    "page_numbers",
];

/// 提供查询参数的请求
pub trait QuerySource {
    fn query_params(&self) -> QueryParams;
}

/// 最小请求：路径与查询串
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub path: String,
    pub query: QueryParams,
}

impl Request {
    /// 由 `path?query#fragment` 形式的地址创建，锚点被忽略
    pub fn from_uri(uri: &str) -> Self {
        let uri = uri.split_once('#').map_or(uri, |(head, _)| head);
        let (path, query) =
            uri.split_once('?').unwrap_or((uri, ""));
        Self {
            path: path.to_string(),
            query: QueryParams::parse(query),
        }
    }
}

impl QuerySource for Request {
    fn query_params(&self) -> QueryParams {
        self.query.clone()
    }
}

impl QuerySource for QueryParams {
    fn query_params(&self) -> QueryParams {
        self.clone()
    }
}

/// 处理函数输出
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutput<R> {
    /// 模板上下文
    Context(Map<String, Value>),
    /// 不需要分页的输出（重定向等）
    Passthrough(R),
}

/// 分页中间件
#[derive(Debug, Clone)]
pub struct PaginationLayer {
    settings: PaginationSettings,
    calculator: PageWindowCalculator,
}

impl PaginationLayer {
    /// 创建中间件，配置无效时立即报错
    pub fn new(settings: PaginationSettings) -> PagerResult<Self> {
        settings.validate()?;
        let calculator =
            PageWindowCalculator::from_settings(&settings)?;
        Ok(Self {
            settings,
            calculator,
        })
    }

    /// 获取配置
    pub fn settings(&self) -> &PaginationSettings {
        &self.settings
    }

    /// 为上下文添加分页信息
    pub fn apply(
        &self,
        mut context: Map<String, Value>,
        query: &QueryParams,
    ) -> PagerResult<Map<String, Value>> {
        let key = self.settings.object_list.as_str();
        let items = match context.remove(key) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(PagerError::MissingObjectList(
                    key.to_string(),
                ))
            }
        };

        let params = PageParams::extract(query, &self.settings);
        let paginator =
            Paginator::new(items.len(), params.per_page)?;
        let range = paginator.page(&items, params.page)?.range();
        let total_pages = paginator.num_pages();
        let view =
            self.calculator.compute(total_pages, params.page)?;

        debug!(
            page = params.page,
            per_page = params.per_page,
            total_pages,
            style = %view.style,
            "paginated handler output"
        );

        let page_items: Vec<Value> = items
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();
        let query_params =
            query.encode_excluding(&params.excluded_params());

        context.insert(key.to_string(), Value::Array(page_items));
        context.insert("page_num".into(), params.page.into());
        context.insert("per_page".into(), params.per_page.into());
        context.insert("total_pages".into(), total_pages.into());
        context.insert(view.style.to_string(), Value::Bool(true));
        context.insert("query_params".into(), query_params.into());
        if let Some(anchor) = &self.settings.anchor {
            context.insert("anchor".into(), anchor.clone().into());
        }

        for reserved in VIEW_KEYS {
            context.remove(reserved);
        }
        if let Value::Object(fields) = serde_json::to_value(&view)? {
            context.extend(fields);
        }

        Ok(context)
    }

    /// 包装处理函数
    pub fn wrap<Q, R, H>(
        self,
        handler: H,
    ) -> impl Fn(&Q) -> PagerResult<HandlerOutput<R>>
    where
        Q: QuerySource,
        H: Fn(&Q) -> HandlerOutput<R>,
    {
        move |request: &Q| match handler(request) {
            HandlerOutput::Context(context) => self
                .apply(context, &request.query_params())
                .map(HandlerOutput::Context),
            passthrough => Ok(passthrough),
        }
    }
}

/// 用分页配置包装处理函数
pub fn paginate<Q, R, H>(
    handler: H,
    settings: PaginationSettings,
) -> PagerResult<impl Fn(&Q) -> PagerResult<HandlerOutput<R>>>
where
    Q: QuerySource,
    H: Fn(&Q) -> HandlerOutput<R>,
{
    Ok(PaginationLayer::new(settings)?.wrap(handler))
}
