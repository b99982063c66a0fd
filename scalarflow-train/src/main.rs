use log::{error, info};
use scalarflow_train::{demo_dataset, from_env, TrainError, Trainer, HOLDOUT_INPUTS};
use std::process::ExitCode;

fn run() -> Result<(), TrainError> {
    let config = from_env()?;
    config.validate()?;
    info!("Configuration: {:?}", config);

    let dataset = demo_dataset();
    let model = config.build_model(2)?;
    let log_every = config.log_every;
    let mut trainer = Trainer::new(config)?;

    trainer.fit_with(&model, &dataset, |report| {
        if log_every > 0 && report.epoch % log_every == 0 {
            println!("{:?}", report.predictions);
            println!("{}", report.loss);
        }
    })?;

    println!("Computing based on learned parameters");
    for input in &HOLDOUT_INPUTS {
        let output = model.predict(input)?;
        println!("{}", output[0]);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
