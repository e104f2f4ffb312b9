/*!
 * 命令系统基础类型
 */

use serde::{Deserialize, Serialize};

/// 命名参数
///
/// 既用于声明命令的参数模式，也用于提供调用实参。
/// 声明模式时只有 `name` 有意义，`value` 被忽略；调用时两者都有意义。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: i64,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// 已注册命令的描述信息
///
/// `parameters` 保持声明顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSchema {
    pub name: String,
    pub parameters: Vec<String>,
}
