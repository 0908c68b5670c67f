//! 类型信息
//!
//! `TypeInfo` 是递归的标签类型：
//! - Builtin: 引用共享的内置类型，从不单独释放
//! - Pointer: 独占一个内层类型
//! - Routine: 独占参数列表和返回类型
//!
//! 指针和例程节点只有一个所有者，随所有者一起按结构递归释放。

use super::builtins::{builtin_by_name, BuiltinType};
use serde::{Serialize, Serializer};
use std::fmt;

/// 类型信息
#[derive(Debug, Clone)]
pub enum TypeInfo {
    /// 内置类型（共享实例）
    Builtin(&'static BuiltinType),
    /// 指针类型 `>T`
    Pointer(Box<TypeInfo>),
    /// 例程类型 `rt [ A, B ]: R`
    Routine(RoutineType),
}

/// 例程（函数）签名
#[derive(Debug, Clone)]
pub struct RoutineType {
    /// 参数类型，按声明顺序；可为空
    pub args: Vec<TypeInfo>,
    /// 返回类型
    pub ret: Box<TypeInfo>,
}

impl TypeInfo {
    /// 查找内置类型，未知名称返回 None
    pub fn builtin(name: &str) -> Option<TypeInfo> {
        builtin_by_name(name).map(TypeInfo::Builtin)
    }

    /// 创建指向 `inner` 的指针类型，接管 `inner`
    pub fn pointer_to(inner: TypeInfo) -> TypeInfo {
        TypeInfo::Pointer(Box::new(inner))
    }

    /// 创建例程类型，接管参数和返回类型
    pub fn routine(
        args: Vec<TypeInfo>,
        ret: TypeInfo,
    ) -> TypeInfo {
        TypeInfo::Routine(RoutineType {
            args,
            ret: Box::new(ret),
        })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeInfo::Builtin(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeInfo::Pointer(_))
    }

    pub fn is_routine(&self) -> bool {
        matches!(self, TypeInfo::Routine(_))
    }

    /// 指针指向的类型
    pub fn pointee(&self) -> Option<&TypeInfo> {
        match self {
            TypeInfo::Pointer(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    pub fn as_routine(&self) -> Option<&RoutineType> {
        match self {
            TypeInfo::Routine(rt) => Some(rt),
            _ => None,
        }
    }

    pub fn as_builtin(&self) -> Option<&'static BuiltinType> {
        match self {
            TypeInfo::Builtin(b) => Some(*b),
            _ => None,
        }
    }

    /// 连续指针层数，`>>u32` 为 2
    pub fn pointer_depth(&self) -> usize {
        let mut depth = 0;
        let mut ty = self;
        while let TypeInfo::Pointer(inner) = ty {
            depth += 1;
            ty = inner.as_ref();
        }
        depth
    }
}

/// 结构相等
///
/// 内置类型比较共享实例的地址；指针比较内层类型；例程要求参数个数相同、
/// 逐个位置相等且返回类型相等。
impl PartialEq for TypeInfo {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (TypeInfo::Builtin(a), TypeInfo::Builtin(b)) => std::ptr::eq(*a, *b),
            (TypeInfo::Pointer(a), TypeInfo::Pointer(b)) => a == b,
            (TypeInfo::Routine(a), TypeInfo::Routine(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TypeInfo {}

impl PartialEq for RoutineType {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.args.len() == other.args.len()
            && self.args.iter().zip(&other.args).all(|(a, b)| a == b)
            && self.ret == other.ret
    }
}

impl Eq for RoutineType {}

/// 规范字符串表示
///
/// - 内置类型：名称
/// - 指针：`>` 加内层；内层是例程时写作 `(` 内层 `)>`
/// - 例程：`rt [ a, b ]: r`，无参数时省略方括号
impl fmt::Display for TypeInfo {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TypeInfo::Builtin(b) => write!(f, "{}", b),
            TypeInfo::Pointer(inner) if inner.is_routine() => write!(f, "({})>", inner),
            TypeInfo::Pointer(inner) => write!(f, ">{}", inner),
            TypeInfo::Routine(rt) => write!(f, "{}", rt),
        }
    }
}

impl fmt::Display for RoutineType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("rt")?;
        if !self.args.is_empty() {
            f.write_str(" [ ")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(" ]")?;
        }
        write!(f, ": {}", self.ret)
    }
}

/// 序列化为规范字符串
impl Serialize for TypeInfo {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
