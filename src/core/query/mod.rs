//! 请求参数与翻页链接

pub mod link;
pub mod params;

pub use self::link::{page_link, page_link_with_anchor};
pub use self::params::{
    PageParams, QueryParams, PAGE_PARAM, PER_PAGE_PARAM,
};
