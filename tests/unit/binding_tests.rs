//! 命令绑定单元测试

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cmdx::{Argument, CommandBinding, CommandError};

    struct Sample {
        bias: i64,
    }

    impl Sample {
        fn diff(&self, a: i64, b: i64) -> i64 {
            a - b
        }

        fn biased_sum(&self, a: i64, b: i64, c: i64) -> i64 {
            self.bias + a + b + c
        }

        fn constant(&self) -> i64 {
            self.bias
        }
    }

    fn sample() -> Arc<Sample> {
        Arc::new(Sample { bias: 100 })
    }

    #[test]
    fn test_bind_with_matching_declaration() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0), Argument::new("b", 0)],
        )
        .unwrap();

        assert_eq!(binding.arity(), 2);
        assert_eq!(binding.parameter_names(), ["a", "b"]);
    }

    #[test]
    fn test_bind_with_wrong_parameter_count() {
        let too_few = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0)],
        );
        assert_eq!(
            too_few.err(),
            Some(CommandError::ParameterCountMismatch {
                expected: 2,
                actual: 1
            })
        );

        let too_many = CommandBinding::bind(
            sample(),
            Sample::constant,
            vec![Argument::new("a", 0)],
        );
        assert_eq!(
            too_many.err(),
            Some(CommandError::ParameterCountMismatch {
                expected: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_bind_with_duplicate_parameter_names() {
        let duplicated = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0), Argument::new("a", 0)],
        );
        assert_eq!(
            duplicated.err(),
            Some(CommandError::DuplicateParameter {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_invoke_result_is_order_independent() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0), Argument::new("b", 0)],
        )
        .unwrap();

        let ordered = binding.invoke(&[Argument::new("a", 3), Argument::new("b", 1)]);
        assert_eq!(ordered, Ok(2));

        let reordered = binding.invoke(&[Argument::new("b", 1), Argument::new("a", 3)]);
        assert_eq!(reordered, Ok(2));
    }

    #[test]
    fn test_invoke_with_wrong_argument_count() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0), Argument::new("b", 0)],
        )
        .unwrap();

        let short_call = binding.invoke(&[Argument::new("a", 3)]);
        assert_eq!(
            short_call,
            Err(CommandError::ArityMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_invoke_with_unknown_argument_name() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("param 1", 0), Argument::new("param 2", 0)],
        )
        .unwrap();

        let unknown = binding.invoke(&[Argument::new("param 1", 3), Argument::new("param 3", 1)]);
        assert_eq!(
            unknown,
            Err(CommandError::UnknownArgument {
                name: "param 3".to_string()
            })
        );
    }

    #[test]
    fn test_invoke_with_duplicate_argument_names() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0), Argument::new("b", 0)],
        )
        .unwrap();

        // 数量虽然匹配，重名实参仍然被整体拒绝
        let duplicated = binding.invoke(&[Argument::new("a", 3), Argument::new("a", 1)]);
        assert_eq!(
            duplicated,
            Err(CommandError::DuplicateArgument {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_zero_arity_binding() {
        let binding = CommandBinding::bind(sample(), Sample::constant, vec![]).unwrap();

        assert_eq!(binding.arity(), 0);
        assert_eq!(binding.invoke(&[]), Ok(100));
    }

    #[test]
    fn test_three_arity_binding_reordered() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::biased_sum,
            vec![
                Argument::new("a", 0),
                Argument::new("b", 0),
                Argument::new("c", 0),
            ],
        )
        .unwrap();

        let result = binding.invoke(&[
            Argument::new("c", 3),
            Argument::new("a", 1),
            Argument::new("b", 2),
        ]);
        assert_eq!(result, Ok(106));
    }

    #[test]
    fn test_declared_values_are_ignored() {
        // 声明里携带的 value 不参与任何计算
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 999), Argument::new("b", -999)],
        )
        .unwrap();

        assert_eq!(
            binding.invoke(&[Argument::new("a", 3), Argument::new("b", 1)]),
            Ok(2)
        );
    }

    #[test]
    fn test_repeated_invocations_are_independent() {
        let binding = CommandBinding::bind(
            sample(),
            Sample::diff,
            vec![Argument::new("a", 0), Argument::new("b", 0)],
        )
        .unwrap();

        assert_eq!(
            binding.invoke(&[Argument::new("a", 10), Argument::new("b", 4)]),
            Ok(6)
        );
        // 上一次调用的值不会泄漏到本次调用
        assert_eq!(
            binding.invoke(&[Argument::new("b", 10), Argument::new("a", 4)]),
            Ok(-6)
        );
    }
}
