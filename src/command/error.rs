/*!
 * 命令系统统一错误处理
 *
 * 提供一致的错误类型定义、分级处理和类别划分
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 命令系统统一错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum CommandError {
    /// 绑定构造：声明的参数数量与方法元数不一致
    #[error("声明参数数量不匹配: 方法需要 {expected} 个, 实际声明 {actual} 个")]
    ParameterCountMismatch { expected: usize, actual: usize },

    /// 绑定构造：声明的参数名重复
    #[error("声明参数名重复: {name}")]
    DuplicateParameter { name: String },

    /// 调用校验：实参数量与声明数量不一致
    #[error("调用参数数量不正确: 期望 {expected} 个, 实际 {actual} 个")]
    ArityMismatch { expected: usize, actual: usize },

    /// 调用校验：同名实参出现多次
    #[error("调用参数重复: {name}")]
    DuplicateArgument { name: String },

    /// 调用校验：实参名不在声明的参数列表中
    #[error("未知调用参数: {name}")]
    UnknownArgument { name: String },

    /// 注册：命令名已被占用
    #[error("命令名已被注册: {name}")]
    DuplicateName { name: String },

    /// 分发：命令名未注册
    #[error("未知命令: {name}")]
    UnknownCommand { name: String },
}

impl CommandError {
    /// 获取错误类别
    ///
    /// `lookup`（命令不存在）与各类参数校验错误相互独立，
    /// 调用方可以据此区分"命令未找到"和"调用形态不对"。
    pub fn category(&self) -> &'static str {
        match self {
            Self::ParameterCountMismatch { .. } | Self::DuplicateParameter { .. } => "binding",
            Self::ArityMismatch { .. }
            | Self::DuplicateArgument { .. }
            | Self::UnknownArgument { .. } => "call",
            Self::DuplicateName { .. } => "registry",
            Self::UnknownCommand { .. } => "lookup",
        }
    }

    /// 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ParameterCountMismatch { .. } => ErrorSeverity::High,
            Self::DuplicateParameter { .. } => ErrorSeverity::High,
            Self::ArityMismatch { .. } => ErrorSeverity::Low,
            Self::DuplicateArgument { .. } => ErrorSeverity::Low,
            Self::UnknownArgument { .. } => ErrorSeverity::Low,
            Self::DuplicateName { .. } => ErrorSeverity::Medium,
            Self::UnknownCommand { .. } => ErrorSeverity::Low,
        }
    }

    /// 判断调整调用输入后重试能否成功（无需重建绑定或注册表）
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ArityMismatch { .. }
                | Self::DuplicateArgument { .. }
                | Self::UnknownArgument { .. }
                | Self::UnknownCommand { .. }
        )
    }
}

/// 错误严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// 结果类型别名
pub type CommandResult<T> = Result<T, CommandError>;
