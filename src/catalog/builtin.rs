//! Experiments shipped with every catalog.

use crate::catalog::experiment::Experiment;
use crate::chain;

/// The built-in experiments, in display order.
pub fn builtin_experiments() -> Vec<Experiment> {
    let weather = chain! {
        nodes: ["sunny" => "Sunny", "rainy" => "Rainy"],
        matrix: {
            "sunny" => { "sunny" => 0.9, "rainy" => 0.1 },
            "rainy" => { "sunny" => 0.5, "rainy" => 0.5 },
        },
        initial: "sunny",
    }
    .expect("Weather chain should always build");

    let random_walk = chain! {
        nodes: [
            "A" => "Pos A",
            "B" => "Pos B",
            "C" => "Pos C",
            "D" => "Pos D",
            "E" => "Pos E",
        ],
        matrix: {
            "A" => { "B" => 1.0 },
            "B" => { "A" => 0.5, "C" => 0.5 },
            "C" => { "B" => 0.5, "D" => 0.5 },
            "D" => { "C" => 0.5, "E" => 0.5 },
            "E" => { "D" => 1.0 },
        },
        initial: "C",
    }
    .expect("Random walk chain should always build");

    let brand_loyalty = chain! {
        nodes: ["alpha" => "AlphaCola", "beta" => "BetaDrink"],
        matrix: {
            "alpha" => { "alpha" => 0.7, "beta" => 0.3 },
            "beta" => { "alpha" => 0.2, "beta" => 0.8 },
        },
        initial: "alpha",
    }
    .expect("Brand loyalty chain should always build");

    let entropy = chain! {
        nodes: ["S1" => "State 1", "S2" => "State 2", "S3" => "State 3"],
        matrix: {
            "S1" => { "S2" => 1.0 },
            "S2" => { "S1" => 0.5, "S3" => 0.5 },
            "S3" => { "S1" => 0.8, "S2" => 0.2 },
        },
        initial: "S1",
    }
    .expect("Entropy chain should always build");

    vec![
        Experiment::builtin(
            "weather-simple",
            "Weather Forecast",
            "A two-state model of sunny and rainy days.",
            "Sunny days tend to follow sunny days. Step the chain and watch how \
             rarely the weather turns, then compare the bar chart with your intuition.",
            &["Basic Probability"],
            weather,
        ),
        Experiment::builtin(
            "random-walk",
            "Random Walk",
            "A walker on five positions with reflecting ends.",
            "From the middle the walker moves left or right with equal chance. \
             Run 100 steps and see which positions are visited most.",
            &["Stochastic Processes"],
            random_walk,
        ),
        Experiment::builtin(
            "brand-loyalty",
            "Brand Loyalty",
            "Customers switching between two drink brands.",
            "Each purchase either repeats the last brand or switches. \
             Over many steps the visit counts settle toward a long-run share.",
            &["Statistics", "Frequentism"],
            brand_loyalty,
        ),
        Experiment::builtin(
            "entropy-info",
            "Entropy and Information",
            "A three-state chain with uneven transitions.",
            "Some transitions are certain and others are coin flips. \
             Watch how predictable the next state is from each node.",
            &["Causality vs Correlation", "Ergodicity"],
            entropy,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationPolicy;
    use stillwater::validation::Validation;

    #[test]
    fn builtins_have_unique_ids() {
        let experiments = builtin_experiments();
        let mut ids: Vec<&str> = experiments.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn builtins_pass_strict_policy() {
        for experiment in builtin_experiments() {
            let audit = ValidationPolicy::strict().audit(&experiment.definition);
            assert!(
                matches!(audit, Validation::Success(_)),
                "{} failed the strict audit",
                experiment.id
            );
        }
    }

    #[test]
    fn builtins_are_not_authored() {
        assert!(builtin_experiments().iter().all(|e| !e.is_authored()));
    }

    #[test]
    fn random_walk_starts_in_the_middle() {
        let experiments = builtin_experiments();
        let walk = experiments
            .iter()
            .find(|e| e.id.as_str() == "random-walk")
            .unwrap();

        assert_eq!(walk.definition.initial_state(), "C");
        assert_eq!(walk.definition.nodes().len(), 5);
        assert_eq!(walk.definition.edges().len(), 8);
    }
}
