//! CmdX 进程内命令分发引擎
//!
//! 将接收者对象的方法绑定为具名命令，按名称分发携带命名参数的调用。
//! 主要功能包括：
//! - 方法绑定与参数模式声明
//! - 命令注册表与按名分发
//! - 调用参数校验与按声明顺序重排

// 模块声明
pub mod command; // 命令绑定与分发核心模块

pub use command::{
    Argument, CommandBinding, CommandError, CommandExecutionStats, CommandMethod, CommandRegistry,
    CommandResult, CommandSchema, ErrorSeverity,
};
