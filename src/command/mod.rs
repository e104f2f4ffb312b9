/*!
 * 命令分发核心模块
 *
 * 负责：方法绑定、调用参数校验、命令注册与按名分发
 */

pub mod binding;
pub mod error;
pub mod method;
pub mod registry;
pub mod types;

// 对外统一导出
pub use binding::CommandBinding;
pub use error::{CommandError, CommandResult, ErrorSeverity};
pub use method::CommandMethod;
pub use registry::{CommandExecutionStats, CommandRegistry};
pub use types::{Argument, CommandSchema};
