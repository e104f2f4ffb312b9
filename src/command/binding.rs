/*!
 * 命令绑定
 *
 * 将接收者对象与其方法按声明的参数模式封装为统一的可调用对象。
 * 调用时接受任意顺序的命名实参，校验后按声明顺序展开为位置调用。
 */

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use super::error::{CommandError, CommandResult};
use super::method::CommandMethod;
use super::types::{Argument, CommandSchema};

/// 类型擦除后的统一调用接口
trait ErasedCall: Send + Sync {
    fn call(&self, values: &[i64]) -> i64;
}

/// 按具体接收者/方法签名实例化的调用实现
struct BoundMethod<R, F, Marker> {
    receiver: Arc<R>,
    method: F,
    _marker: PhantomData<fn() -> Marker>,
}

impl<R, F, Marker> ErasedCall for BoundMethod<R, F, Marker>
where
    R: Send + Sync + 'static,
    F: CommandMethod<R, Marker>,
    Marker: 'static,
{
    fn call(&self, values: &[i64]) -> i64 {
        self.method.apply(&self.receiver, values)
    }
}

/// 命令绑定：一条命令的完整实现
///
/// 接收者以引用计数方式共享持有，绑定存在期间接收者始终有效。
/// 构造成功后方法与参数声明不再变化。
pub struct CommandBinding {
    /// 声明顺序的参数名列表
    declared: Vec<String>,
    call: Box<dyn ErasedCall>,
}

impl CommandBinding {
    /// 将接收者方法与参数声明绑定为命令实现
    ///
    /// 声明数量必须等于方法元数，且参数名两两不同，否则构造失败。
    /// 声明中的 `value` 字段不参与绑定，仅 `name` 有意义。
    pub fn bind<R, F, Marker>(
        receiver: Arc<R>,
        method: F,
        declared: Vec<Argument>,
    ) -> CommandResult<Self>
    where
        R: Send + Sync + 'static,
        F: CommandMethod<R, Marker>,
        Marker: 'static,
    {
        if declared.len() != method.arity() {
            return Err(CommandError::ParameterCountMismatch {
                expected: method.arity(),
                actual: declared.len(),
            });
        }
        if let Some(name) = first_duplicate(&declared) {
            return Err(CommandError::DuplicateParameter { name });
        }

        Ok(Self {
            declared: declared.into_iter().map(|arg| arg.name).collect(),
            call: Box::new(BoundMethod {
                receiver,
                method,
                _marker: PhantomData,
            }),
        })
    }

    /// 方法元数（等于声明的参数数量）
    pub fn arity(&self) -> usize {
        self.declared.len()
    }

    /// 声明顺序的参数名
    pub fn parameter_names(&self) -> &[String] {
        &self.declared
    }

    /// 以给定命令名生成描述信息
    pub fn schema(&self, name: impl Into<String>) -> CommandSchema {
        CommandSchema {
            name: name.into(),
            parameters: self.declared.clone(),
        }
    }

    /// 以任意顺序的命名实参调用绑定的方法
    ///
    /// 实参先做数量与重名校验，再逐个写入同名声明参数的位置，
    /// 最终按声明顺序（而非实参顺序）展开为位置调用。
    pub fn invoke(&self, call_args: &[Argument]) -> CommandResult<i64> {
        if call_args.len() != self.declared.len() {
            return Err(CommandError::ArityMismatch {
                expected: self.declared.len(),
                actual: call_args.len(),
            });
        }
        if let Some(name) = first_duplicate(call_args) {
            return Err(CommandError::DuplicateArgument { name });
        }

        // 数量一致且名字互不相同，每个位置恰好被写入一次
        let mut values = vec![0i64; self.declared.len()];
        for arg in call_args {
            let position = self
                .declared
                .iter()
                .position(|declared| *declared == arg.name)
                .ok_or_else(|| CommandError::UnknownArgument {
                    name: arg.name.clone(),
                })?;
            values[position] = arg.value;
        }

        debug!("调用绑定方法, 位置参数: {:?}", values);
        Ok(self.call.call(&values))
    }
}

/// 返回列表中第一个重复出现的参数名
fn first_duplicate(args: &[Argument]) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if args[i + 1..].iter().any(|other| other.name == arg.name) {
            return Some(arg.name.clone());
        }
    }
    None
}
