//! 命令行界面模块

pub mod args;
pub mod render;

use anyhow::Context;
use clap::Parser;
use colored::*;

use page_window::app::config::settings::PaginationSettings;
use page_window::app::error::types::Result;
use page_window::core::paginate::Paginator;
use page_window::core::window::PageWindowCalculator;

use self::args::CliArgs;
use self::render::render_bar;

/// 运行命令行界面
pub fn run_cli() -> Result<()> {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // 检查配置文件是否存在
    if let Some(path) = &args.config {
        if !path.exists() {
            eprintln!(
                "{} 配置文件不存在: {}",
                "错误".red().bold(),
                path.display()
            );
            std::process::exit(1);
        }
    }

    let settings = load_settings(&args)?;
    let paginator =
        Paginator::new(args.total_items, settings.per_page)?;
    let calculator = PageWindowCalculator::from_settings(&settings)?;

    let total_pages = paginator.num_pages();
    let view = match calculator.compute(total_pages, args.page) {
        Ok(view) => view,
        Err(err) if err.is_not_found() => {
            eprintln!("{} {}", "错误".red().bold(), err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_bar(&view, args.page));
        println!(
            "{}",
            format!(
                "第 {} 页 / 共 {} 页 (共 {} 条, 每页 {} 条, 样式 {})",
                args.page,
                total_pages,
                args.total_items,
                settings.per_page,
                view.style
            )
            .bright_black()
        );
    }

    Ok(())
}

/// 加载配置并叠加命令行参数
fn load_settings(args: &CliArgs) -> Result<PaginationSettings> {
    let mut settings = match &args.config {
        Some(path) => PaginationSettings::load(path).with_context(|| {
            format!("failed to load {}", path.display())
        })?,
        None => PaginationSettings::load_default()?,
    };

    if let Some(style) = &args.style {
        settings.style = style.clone();
    }
    if let Some(frame_size) = args.frame_size {
        settings.frame_size = frame_size;
    }
    if let Some(per_page) = args.per_page {
        settings.per_page = per_page;
    }

    settings.validate()?;
    Ok(settings)
}
