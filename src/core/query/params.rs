//! 查询参数解析

use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet,
    NON_ALPHANUMERIC,
};
use tracing::{debug, warn};

use crate::app::config::settings::PaginationSettings;

/// 页码参数名
pub const PAGE_PARAM: &str = "page";
/// 每页数量参数名
pub const PER_PAGE_PARAM: &str = "per_page";

/// 查询串组件中需要转义的字符
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// 有序的查询参数（已解码）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// 由键值对创建
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 解析原始查询串，允许带前导 `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) =
                    part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// 获取参数的第一个值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 重新编码除 `excluded` 之外的参数，保持原有顺序
    pub fn encode_excluding(&self, excluded: &[&str]) -> String {
        self.pairs
            .iter()
            .filter(|(k, _)| !excluded.contains(&k.as_str()))
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    encode_component(k),
                    encode_component(v)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT)
        .to_string()
        .replace(' ', "+")
}

/// 从请求中提取的分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 请求的页码，未做范围检查
    pub page: u32,
    /// 生效的每页数量
    pub per_page: u32,
    /// `per_page` 是否被消费（不再出现在翻页链接的查询串中）
    pub per_page_consumed: bool,
}

impl PageParams {
    /// 提取页码与每页数量
    ///
    /// 缺失或非数字的页码回退为 1；0 或负数保留为 0，
    /// 交由范围检查报告越界。
    /// 每页数量只有在允许覆盖且通过限制时才生效，否则回退为配置值。
    pub fn extract(
        params: &QueryParams,
        settings: &PaginationSettings,
    ) -> Self {
        let raw_page = params
            .get(PAGE_PARAM)
            .map(|v| v.trim().parse::<i64>());
        let page = match raw_page {
            Some(Ok(page)) => {
                u32::try_from(page.max(0)).unwrap_or(u32::MAX)
            }
            Some(Err(_)) => {
                debug!("non-numeric page parameter, using page 1");
                1
            }
            None => 1,
        };

        let mut per_page = settings.per_page;
        let mut per_page_consumed = false;

        if settings.allow_per_page_override {
            if let Some(raw) = params.get(PER_PAGE_PARAM) {
                per_page_consumed = true;
                match raw.trim().parse::<u32>() {
                    Ok(value) if settings.accepts_per_page(value) => {
                        per_page = value;
                    }
                    Ok(value) => {
                        warn!(
                            per_page = value,
                            "per_page override rejected"
                        );
                    }
                    Err(_) => {
                        debug!(
                            "non-numeric per_page parameter, \
                             using default"
                        );
                    }
                }
            }
        }

        Self {
            page,
            per_page,
            per_page_consumed,
        }
    }

    /// 翻页链接需要排除的参数
    pub fn excluded_params(&self) -> Vec<&'static str> {
        if self.per_page_consumed {
            vec![PAGE_PARAM, PER_PAGE_PARAM]
        } else {
            vec![PAGE_PARAM]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PaginationSettings {
        PaginationSettings {
            allow_per_page_override: true,
            max_per_page: Some(50),
            disallowed_per_page: vec![13],
            ..PaginationSettings::default()
        }
    }

    fn extract(
        query: &str,
        settings: &PaginationSettings,
    ) -> PageParams {
        PageParams::extract(&QueryParams::parse(query), settings)
    }

    #[test]
    fn parses_and_decodes_query() {
        let params =
            QueryParams::parse("?q=rust+lang&tag=a%26b&page=3&flag");
        assert_eq!(params.get("q"), Some("rust lang"));
        assert_eq!(params.get("tag"), Some("a&b"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("flag"), Some(""));
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn re_encodes_remaining_params_in_order() {
        let params = QueryParams::parse(
            "q=rust+lang&page=3&tag=a%26b&per_page=20",
        );
        assert_eq!(
            params.encode_excluding(&[PAGE_PARAM]),
            "q=rust+lang&tag=a%26b&per_page=20"
        );
        assert_eq!(
            params.encode_excluding(&[PAGE_PARAM, PER_PAGE_PARAM]),
            "q=rust+lang&tag=a%26b"
        );
    }

    #[test]
    fn missing_or_malformed_page_defaults_to_first() {
        let defaults = PaginationSettings::default();
        assert_eq!(extract("", &defaults).page, 1);
        assert_eq!(extract("page=abc", &defaults).page, 1);
    }

    #[test]
    fn zero_or_negative_page_is_kept_for_range_check() {
        let defaults = PaginationSettings::default();
        assert_eq!(extract("page=0", &defaults).page, 0);
        assert_eq!(extract("page=-2", &defaults).page, 0);
    }

    #[test]
    fn per_page_ignored_unless_override_allowed() {
        let defaults = PaginationSettings::default();
        let params = extract("per_page=30", &defaults);
        assert_eq!(params.per_page, defaults.per_page);
        assert!(!params.per_page_consumed);
        assert_eq!(params.excluded_params(), vec![PAGE_PARAM]);
    }

    #[test]
    fn per_page_override_respects_limits() {
        let settings = settings();

        let accepted = extract("per_page=30", &settings);
        assert_eq!(accepted.per_page, 30);
        assert!(accepted.per_page_consumed);

        for raw in [
            "per_page=51",
            "per_page=13",
            "per_page=0",
            "per_page=x",
        ] {
            let rejected = extract(raw, &settings);
            assert_eq!(rejected.per_page, settings.per_page, "{raw}");
            assert!(rejected.per_page_consumed, "{raw}");
        }
    }
}
