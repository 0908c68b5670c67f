//! 内置类型目录
//!
//! 内置类型只有一个进程级共享实例，所有对 `u32` 的引用都指向同一个
//! `&'static BuiltinType`，因此可以用地址比较判断相等。

use std::fmt;

/// 内置（原始）类型
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BuiltinType {
    name: &'static str,
}

impl BuiltinType {
    const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// 类型名
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 注册的内置类型，顺序即注册顺序
static BUILTIN_TYPES: [BuiltinType; 11] = [
    BuiltinType::new("void"),
    BuiltinType::new("bool"),
    BuiltinType::new("char"),
    BuiltinType::new("u8"),
    BuiltinType::new("i8"),
    BuiltinType::new("u16"),
    BuiltinType::new("i16"),
    BuiltinType::new("u32"),
    BuiltinType::new("i32"),
    BuiltinType::new("u64"),
    BuiltinType::new("i64"),
];

/// 按名称精确查找内置类型
pub fn builtin_by_name(name: &str) -> Option<&'static BuiltinType> {
    BUILTIN_TYPES.iter().find(|b| b.name == name)
}

/// 全部内置类型名
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TYPES.iter().map(|b| b.name)
}
