/*!
 * 方法元数泛化层
 *
 * 为 0~8 元的 `Fn(&R, i64, ...) -> i64` 形态统一实现 `CommandMethod`，
 * 使任意元数的接收者方法都能以位置参数切片的方式被调用。
 */

/// 可绑定为命令的方法能力
///
/// `Marker` 仅用于区分不同元数的实现，不携带任何数据。
pub trait CommandMethod<R, Marker>: Send + Sync + 'static {
    /// 方法的固定元数
    fn arity(&self) -> usize;

    /// 以声明顺序的位置参数调用方法
    ///
    /// 调用方保证 `values.len()` 等于 `arity()`。
    fn apply(&self, receiver: &R, values: &[i64]) -> i64;
}

// 把占位下标替换为参数类型
macro_rules! arg_ty {
    ($idx:tt) => { i64 };
}

macro_rules! impl_command_method {
    ($arity:literal => $($idx:tt),*) => {
        impl<R, F> CommandMethod<R, [(); $arity]> for F
        where
            F: Fn(&R $(, arg_ty!($idx))*) -> i64 + Send + Sync + 'static,
        {
            fn arity(&self) -> usize {
                $arity
            }

            fn apply(&self, receiver: &R, values: &[i64]) -> i64 {
                self(receiver $(, values[$idx])*)
            }
        }
    };
}

impl_command_method!(0 =>);
impl_command_method!(1 => 0);
impl_command_method!(2 => 0, 1);
impl_command_method!(3 => 0, 1, 2);
impl_command_method!(4 => 0, 1, 2, 3);
impl_command_method!(5 => 0, 1, 2, 3, 4);
impl_command_method!(6 => 0, 1, 2, 3, 4, 5);
impl_command_method!(7 => 0, 1, 2, 3, 4, 5, 6);
impl_command_method!(8 => 0, 1, 2, 3, 4, 5, 6, 7);
