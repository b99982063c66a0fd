use scalarflow_core::Module;
use scalarflow_train::{
    demo_dataset, Dataset, Sample, TrainConfig, TrainError, Trainer, VecDataset, HOLDOUT_INPUTS,
};
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

fn init_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[test]
fn reference_run_reduces_loss() {
    init_logger();
    let config = TrainConfig {
        epochs: 200,
        ..TrainConfig::default()
    };
    let model = config.build_model(2).unwrap();
    let history = Trainer::new(config).unwrap().fit(&model, &demo_dataset()).unwrap();
    assert_eq!(history.losses.len(), 200);
    assert!(history.is_improving());

    for input in &HOLDOUT_INPUTS {
        let out = model.predict(input).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0] > -1.0 && out[0] < 1.0);
    }
}

#[test]
fn single_neuron_loss_is_non_increasing_on_average() {
    init_logger();
    let config = TrainConfig {
        epochs: 300,
        hidden_sizes: vec![1],
        log_every: 0,
        ..TrainConfig::default()
    };
    let model = config.build_model(2).unwrap();
    assert_eq!(model.num_parameters(), 3);
    let history = Trainer::new(config).unwrap().fit(&model, &demo_dataset()).unwrap();
    let means: Vec<f64> = history
        .losses
        .chunks(30)
        .map(|c| c.iter().sum::<f64>() / c.len() as f64)
        .collect();
    for pair in means.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12, "window means increased: {means:?}");
    }
}

#[test]
fn same_seed_same_history() {
    let config = TrainConfig {
        epochs: 20,
        hidden_sizes: vec![3, 1],
        ..TrainConfig::default()
    };
    let run = |config: &TrainConfig| {
        let model = config.build_model(2).unwrap();
        Trainer::new(config.clone())
            .unwrap()
            .fit(&model, &demo_dataset())
            .unwrap()
    };
    assert_eq!(run(&config), run(&config));
}

#[test]
fn custom_dataset_is_learned() {
    // targets follow y = x / 2
    let samples: VecDataset<Sample> = (0..8)
        .map(|i| {
            let x = i as f64 / 8.0;
            Sample::new(vec![x], 0.5 * x)
        })
        .collect();
    assert_eq!(samples.len(), 8);
    let config = TrainConfig {
        epochs: 150,
        hidden_sizes: vec![4, 1],
        learning_rate: 0.05,
        ..TrainConfig::default()
    };
    let model = config.build_model(1).unwrap();
    let history = Trainer::new(config).unwrap().fit(&model, &samples).unwrap();
    assert!(history.final_loss().unwrap() < history.first_loss().unwrap());
}

#[test]
fn invalid_config_is_rejected_before_training() {
    let config = TrainConfig {
        learning_rate: -0.1,
        ..TrainConfig::default()
    };
    assert!(matches!(Trainer::new(config), Err(TrainError::Config(_))));
}
