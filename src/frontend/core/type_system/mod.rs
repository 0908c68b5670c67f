//! 类型系统子模块
//!
//! - builtins: 内置类型目录（共享静态实例）
//! - type_info: 递归类型表示、结构相等与规范字符串

pub mod builtins;
pub mod type_info;
#[cfg(test)]
mod tests;

// 重新导出主要类型
pub use builtins::{builtin_by_name, builtin_names, BuiltinType};
pub use type_info::{RoutineType, TypeInfo};
