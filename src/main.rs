//! 分页窗口预览程序

mod cli;

use page_window::app::error::types::Result;
use page_window::app::logging::setup::init_logging;

fn main() -> Result<()> {
    // 初始化日志系统
    init_logging();

    // 运行命令行界面
    cli::run_cli()
}
