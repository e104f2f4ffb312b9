/*!
 * 命令注册表
 *
 * 负责：命令的具名注册、查找、分发与执行统计
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::binding::CommandBinding;
use super::error::{CommandError, CommandResult};
use super::types::{Argument, CommandSchema};

/// 命令执行统计
#[derive(Debug, Clone, Default)]
pub struct CommandExecutionStats {
    pub total_calls: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub total_execution_time_ms: u64,
    pub avg_execution_time_ms: u64,
}

/// 命令注册表
///
/// 不含任何内部同步；跨线程共享时由调用方自行加锁。
pub struct CommandRegistry {
    commands: HashMap<String, Arc<CommandBinding>>,
    execution_stats: HashMap<String, CommandExecutionStats>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            execution_stats: HashMap::new(),
        }
    }

    /// 注册命令
    ///
    /// 命令名不可与既有命令重复；重名时注册失败，既有命令不受影响。
    pub fn register(&mut self, name: &str, binding: Arc<CommandBinding>) -> CommandResult<()> {
        if self.commands.contains_key(name) {
            return Err(CommandError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.commands.insert(name.to_string(), binding);
        self.execution_stats
            .insert(name.to_string(), CommandExecutionStats::default());

        info!("成功注册命令: {}", name);
        Ok(())
    }

    /// 按名称执行命令
    ///
    /// 未注册的命令名返回查找类错误；参数校验完全由绑定负责，
    /// 校验或执行结果原样向上传递。
    pub fn execute(&mut self, name: &str, call_args: &[Argument]) -> CommandResult<i64> {
        let binding = self
            .commands
            .get(name)
            .cloned()
            .ok_or_else(|| CommandError::UnknownCommand {
                name: name.to_string(),
            })?;

        debug!("执行命令: {} ({} 个实参)", name, call_args.len());

        let start = Instant::now();
        let result = binding.invoke(call_args);
        let elapsed = start.elapsed().as_millis() as u64;

        match &result {
            Ok(value) => {
                self.update_stats(name, true, elapsed);
                debug!("命令 {} 执行完成, 结果: {}", name, value);
            }
            Err(e) => {
                self.update_stats(name, false, elapsed);
                warn!("命令 {} 执行失败: {}", name, e);
            }
        }

        result
    }

    fn update_stats(&mut self, name: &str, success: bool, execution_time_ms: u64) {
        if let Some(stats) = self.execution_stats.get_mut(name) {
            stats.total_calls += 1;
            if success {
                stats.success_count += 1;
            } else {
                stats.failure_count += 1;
            }
            stats.total_execution_time_ms += execution_time_ms;
            stats.avg_execution_time_ms = stats.total_execution_time_ms / stats.total_calls.max(1);
        }
    }

    /// 查询命令是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// 已注册的命令数量
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 已注册命令名（按字典序）
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// 全部命令的描述信息（按命令名排序）
    pub fn schemas(&self) -> Vec<CommandSchema> {
        let mut schemas: Vec<CommandSchema> = self
            .commands
            .iter()
            .map(|(name, binding)| binding.schema(name.clone()))
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// 指定命令的执行统计
    pub fn stats(&self, name: &str) -> Option<&CommandExecutionStats> {
        self.execution_stats.get(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
