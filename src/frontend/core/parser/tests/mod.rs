//! Parser tests module
//!
//! Organized test modules for better maintainability:
//! - state: ParserState 单元测试
//! - type_parser: 类型解析测试
//! - declarations: 声明解析测试
//! - errors: 错误处理与位置测试
//! - fuzz: proptest 类型往返测试
