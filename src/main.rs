//! CmdX 驱动程序
//!
//! 注册一组示例命令并发起各种形态的调用，统计并输出失败场景数量。

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cmdx::{Argument, CommandBinding, CommandError, CommandRegistry};

/// 示例接收者：整数运算
struct Calculator;

impl Calculator {
    fn subtract(&self, minuend: i64, subtrahend: i64) -> i64 {
        minuend - subtrahend
    }

    fn add(&self, augend: i64, addend: i64) -> i64 {
        augend + addend
    }

    fn negate(&self, value: i64) -> i64 {
        -value
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("日志系统初始化失败: {e}");
        std::process::exit(1);
    }
}

fn check(failed: &mut u32, label: &str, passed: bool) {
    if passed {
        info!("[通过] {}", label);
    } else {
        *failed += 1;
        error!("[失败] {}", label);
    }
}

fn run() -> Result<u32> {
    let calculator = Arc::new(Calculator);
    let mut registry = CommandRegistry::new();

    registry.register(
        "subtract",
        Arc::new(CommandBinding::bind(
            Arc::clone(&calculator),
            Calculator::subtract,
            vec![Argument::new("minuend", 0), Argument::new("subtrahend", 0)],
        )?),
    )?;
    registry.register(
        "add",
        Arc::new(CommandBinding::bind(
            Arc::clone(&calculator),
            Calculator::add,
            vec![Argument::new("augend", 0), Argument::new("addend", 0)],
        )?),
    )?;
    registry.register(
        "negate",
        Arc::new(CommandBinding::bind(
            Arc::clone(&calculator),
            Calculator::negate,
            vec![Argument::new("value", 0)],
        )?),
    )?;

    info!(
        "已注册命令: {}",
        serde_json::to_string_pretty(&registry.schemas())?
    );

    let mut failed = 0u32;

    // 声明数量与方法元数不一致的绑定被拒绝
    let incomplete = CommandBinding::bind(
        Arc::clone(&calculator),
        Calculator::subtract,
        vec![Argument::new("minuend", 0)],
    );
    check(
        &mut failed,
        "不完整的参数声明被拒绝",
        matches!(
            incomplete,
            Err(CommandError::ParameterCountMismatch { .. })
        ),
    );

    // 重名注册被拒绝，既有命令不受影响
    let duplicate = registry.register(
        "subtract",
        Arc::new(CommandBinding::bind(
            Arc::clone(&calculator),
            Calculator::add,
            vec![Argument::new("augend", 0), Argument::new("addend", 0)],
        )?),
    );
    check(
        &mut failed,
        "重名注册被拒绝",
        matches!(duplicate, Err(CommandError::DuplicateName { .. })),
    );

    // 实参顺序不影响调用结果
    let ordered = registry.execute(
        "subtract",
        &[Argument::new("minuend", 3), Argument::new("subtrahend", 1)],
    );
    check(&mut failed, "按声明顺序调用", ordered == Ok(2));

    let reordered = registry.execute(
        "subtract",
        &[Argument::new("subtrahend", 3), Argument::new("minuend", 1)],
    );
    check(&mut failed, "乱序实参调用", reordered == Ok(-2));

    let negated = registry.execute("negate", &[Argument::new("value", 5)]);
    check(&mut failed, "一元命令调用", negated == Ok(-5));

    // 各类失败形态
    let missing = registry.execute("multiply", &[Argument::new("value", 1)]);
    check(
        &mut failed,
        "未注册命令被拒绝",
        matches!(missing, Err(CommandError::UnknownCommand { .. })),
    );

    let short_call = registry.execute("subtract", &[Argument::new("minuend", 3)]);
    check(
        &mut failed,
        "实参数量不足被拒绝",
        matches!(short_call, Err(CommandError::ArityMismatch { .. })),
    );

    let unknown_arg = registry.execute(
        "subtract",
        &[Argument::new("minuend", 3), Argument::new("divisor", 1)],
    );
    check(
        &mut failed,
        "未知实参名被拒绝",
        matches!(unknown_arg, Err(CommandError::UnknownArgument { .. })),
    );

    let duplicated_arg = registry.execute(
        "subtract",
        &[Argument::new("minuend", 3), Argument::new("minuend", 1)],
    );
    check(
        &mut failed,
        "重复实参名被拒绝",
        matches!(duplicated_arg, Err(CommandError::DuplicateArgument { .. })),
    );

    if let Some(stats) = registry.stats("subtract") {
        info!(
            "subtract 统计: 总调用 {} 次, 成功 {} 次, 失败 {} 次",
            stats.total_calls, stats.success_count, stats.failure_count
        );
    }

    Ok(failed)
}

fn main() -> ExitCode {
    init_logging();
    info!("命令分发引擎演示开始");

    match run() {
        Ok(0) => {
            info!("全部演示场景通过");
            ExitCode::SUCCESS
        }
        Ok(failed) => {
            error!("演示场景失败数: {}", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("演示异常终止: {e:#}");
            ExitCode::FAILURE
        }
    }
}
