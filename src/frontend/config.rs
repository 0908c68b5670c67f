//! 编译配置
//!
//! 管理编译器配置选项：输出阶段、输出格式、输出文件。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 输出阶段
///
/// 编译在该阶段之后停止，并输出该阶段的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStage {
    /// 词法分析：输出 token 列表
    Lex,
    /// 语法分析：输出全局声明
    #[default]
    Parse,
}

impl OutputStage {
    /// 从命令行数字选择阶段：0 = 词法，1 = 语法
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(OutputStage::Lex),
            1 => Some(OutputStage::Parse),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            OutputStage::Lex => 0,
            OutputStage::Parse => 1,
        }
    }
}

impl std::fmt::Display for OutputStage {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            OutputStage::Lex => write!(f, "lex"),
            OutputStage::Parse => write!(f, "parse"),
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人类可读的记录格式
    #[default]
    Text,
    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// 编译配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompileConfig {
    /// 输出阶段
    #[serde(default)]
    pub stage: OutputStage,

    /// 输出格式
    #[serde(default)]
    pub format: OutputFormat,

    /// 输出文件，`None` 表示标准输出
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl CompileConfig {
    /// 创建默认配置
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置输出阶段
    #[inline]
    pub fn with_stage(
        mut self,
        stage: OutputStage,
    ) -> Self {
        self.stage = stage;
        self
    }

    /// 设置输出格式
    #[inline]
    pub fn with_format(
        mut self,
        format: OutputFormat,
    ) -> Self {
        self.format = format;
        self
    }

    /// 设置输出文件
    #[inline]
    pub fn with_output(
        mut self,
        output: PathBuf,
    ) -> Self {
        self.output = Some(output);
        self
    }
}

/// 从外部配置创建编译配置
pub trait ConfigAdapter {
    /// 从源配置创建编译配置
    fn adapt(&self) -> CompileConfig;
}
