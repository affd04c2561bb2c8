//! 处理函数分页中间件

pub mod layer;

pub use self::layer::{
    paginate, HandlerOutput, PaginationLayer, QuerySource, Request,
    VIEW_KEYS,
};
