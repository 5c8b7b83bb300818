mod strategy_test {
    use leibniz_pi::{series, Estimate, EstimatorConfig, Partition, PiEstimator, Strategy};

    const STRATEGIES: [Strategy; 3] = [
        Strategy::ForkJoin,
        Strategy::Serialized,
        Strategy::ScatterGather,
    ];

    fn run(config: EstimatorConfig) -> Estimate {
        PiEstimator::new(config).estimate().unwrap()
    }

    #[test]
    fn strategies_agree_test() {
        println!("[STRATEGY TEST]");
        let terms: u64 = 1_000_003;
        let reference: f64 = series::sequential(0..1_000_000);

        for strategy in STRATEGIES {
            let config: EstimatorConfig = EstimatorConfig::new(terms, 8).with_strategy(strategy);
            let estimate: Estimate = run(config);
            println!("{:?}: {}", strategy, estimate.value);

            assert!((estimate.value - reference).abs() < 1e-9);
            assert_eq!(estimate.covered_terms, 1_000_000);
            assert_eq!(estimate.workers, 8);
        }
    }

    #[test]
    fn remainder_policy_test() {
        println!("[REMAINDER POLICY TEST]");
        let terms: u64 = 1_000_003;
        let reference: f64 = series::sequential(0..terms);

        for strategy in STRATEGIES {
            let config: EstimatorConfig = EstimatorConfig::new(terms, 8)
                .with_partition(Partition::Remainder)
                .with_strategy(strategy);
            let estimate: Estimate = run(config);

            assert!((estimate.value - reference).abs() < 1e-9);
            assert_eq!(estimate.covered_terms, terms);
        }
    }

    #[test]
    fn job_distribution_test() {
        for strategy in STRATEGIES {
            let config: EstimatorConfig = EstimatorConfig::new(50_000, 12).with_strategy(strategy);
            let estimate: Estimate = run(config);

            let dist_sum: usize = estimate.job_distribution.iter().sum();
            println!(
                "{:?} Distribution: {:?} | Sum: {}",
                strategy, estimate.job_distribution, dist_sum
            );
            assert_eq!(estimate.job_distribution.len(), 12);
            assert_eq!(dist_sum, 12);
        }
    }

    #[test]
    fn dispatched_and_concluded_test() {
        println!("[DISPATCH COUNT TEST]");
        for strategy in STRATEGIES {
            let config: EstimatorConfig = EstimatorConfig::new(90_000, 9).with_strategy(strategy);
            let estimate: Estimate = run(config);
            println!(
                "{:?} Dispatched: {} | Concluded: {}",
                strategy, estimate.dispatched, estimate.concluded
            );

            assert_eq!(estimate.dispatched, 9);
            assert_eq!(estimate.concluded, 9);
        }
    }

    #[test]
    fn single_and_many_workers_test() {
        let terms: u64 = 600_000;
        for strategy in STRATEGIES {
            let single: Estimate = run(EstimatorConfig::new(terms, 1).with_strategy(strategy));
            let many: Estimate = run(EstimatorConfig::new(terms, 60).with_strategy(strategy));
            assert!((single.value - many.value).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_workers_rejected_test() {
        for strategy in STRATEGIES {
            let config: EstimatorConfig = EstimatorConfig::new(10, 0).with_strategy(strategy);
            assert!(PiEstimator::new(config).estimate().is_err());
        }
    }

    #[test]
    fn too_many_workers_rejected_test() {
        for strategy in STRATEGIES {
            let config: EstimatorConfig =
                EstimatorConfig::new(10, usize::MAX).with_strategy(strategy);
            let result = PiEstimator::new(config).estimate();
            assert!(matches!(
                result,
                Err(leibniz_pi::EstimateError::TooManyWorkers { .. })
            ));
        }
    }
}

mod config_test {
    use leibniz_pi::{EstimatorConfig, Partition, Strategy};

    #[test]
    fn default_config_test() {
        let config: EstimatorConfig = EstimatorConfig::default();
        assert_eq!(config.total_terms, 100_000_000);
        assert_eq!(config.worker_count, 50);
        assert_eq!(config.partition, Partition::Truncate);
        assert_eq!(config.strategy, Strategy::ForkJoin);
        assert!(config.validate().is_ok());
    }
}
