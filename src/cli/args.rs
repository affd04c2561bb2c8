//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

/// 分页窗口预览 - 按样式输出要显示的页码
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 条目总数
    #[arg(short = 't', long = "total-items")]
    pub total_items: usize,

    /// 每页条目数 (默认: 配置值)
    #[arg(short = 'p', long = "per-page")]
    pub per_page: Option<u32>,

    /// 当前页码 (默认: 1)
    #[arg(short = 'n', long = "page", default_value = "1")]
    pub page: u32,

    /// 样式: digg / filmfeed / muzx (默认: 配置值)
    #[arg(short, long)]
    pub style: Option<String>,

    /// 窗口大小 (默认: 配置值)
    #[arg(short = 'f', long = "frame-size")]
    pub frame_size: Option<u32>,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出分页视图
    #[arg(long)]
    pub json: bool,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,
}
