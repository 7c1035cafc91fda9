//! Macros for concise chain declarations.

/// Declare a chain definition inline.
///
/// Expands to a [`ChainBuilder`](crate::builder::ChainBuilder) call chain
/// and evaluates to `Result<ChainDefinition, BuildError>`. Rows and their
/// entries keep the order they are written in.
///
/// # Example
///
/// ```
/// use markov_lab::chain;
///
/// let weather = chain! {
///     nodes: ["sunny" => "Sunny", "rainy" => "Rainy"],
///     matrix: {
///         "sunny" => { "sunny" => 0.9, "rainy" => 0.1 },
///         "rainy" => { "sunny" => 0.5, "rainy" => 0.5 },
///     },
///     initial: "sunny",
/// }
/// .unwrap();
///
/// assert_eq!(weather.nodes().len(), 2);
/// assert_eq!(weather.row("sunny").unwrap().probability("rainy"), Some(0.1));
/// ```
#[macro_export]
macro_rules! chain {
    (
        nodes: [$($id:literal => $label:literal),+ $(,)?],
        matrix: {
            $(
                $source:literal => { $($target:literal => $p:expr),* $(,)? }
            ),* $(,)?
        },
        initial: $initial:literal $(,)?
    ) => {
        $crate::builder::ChainBuilder::new()
            $(.node($id, $label))+
            $(
                .row(
                    $source,
                    $crate::core::TransitionRow::new()$(.with($target, $p))*,
                )
            )*
            .initial($initial)
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;

    #[test]
    fn chain_macro_builds_definition() {
        let walk = chain! {
            nodes: ["A" => "Pos A", "B" => "Pos B", "C" => "Pos C"],
            matrix: {
                "A" => { "B" => 1.0 },
                "B" => { "A" => 0.5, "C" => 0.5 },
                "C" => { "B" => 1.0 },
            },
            initial: "B",
        }
        .unwrap();

        assert_eq!(walk.initial_state(), "B");
        assert_eq!(walk.matrix().len(), 3);
        assert_eq!(walk.edges()[1].id, "B-A");
    }

    #[test]
    fn chain_macro_allows_empty_rows() {
        let chain = chain! {
            nodes: ["only" => "Only"],
            matrix: {
                "only" => {},
            },
            initial: "only",
        }
        .unwrap();

        assert!(chain.row("only").unwrap().is_empty());
    }

    #[test]
    fn chain_macro_reports_build_errors() {
        let result = chain! {
            nodes: ["A" => "A"],
            matrix: {},
            initial: "Z",
        };

        assert!(matches!(result, Err(BuildError::UnknownInitialState { .. })));
    }
}
