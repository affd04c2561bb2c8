//! 配置模块

pub mod settings;
