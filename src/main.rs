use clap::Parser;
use person_name::utils::{logger, validation::Validate};
use person_name::{CliConfig, NameError, PersonName, ScenarioRunner};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting person-name");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ person-name failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), NameError> {
    // 驗證配置
    config.validate()?;

    let scenario = config.load_scenario()?;
    let person = PersonName::new(&scenario.given_name, &scenario.family_name);
    let mut runner = ScenarioRunner::new(person);

    let transcript = runner.run(&scenario.steps)?;
    if config.json {
        println!("{}", transcript.to_json()?);
    } else if !transcript.observations.is_empty() {
        println!("{}", transcript.render());
    }

    tracing::debug!("Final state: {}", serde_json::to_string(runner.holder())?);
    Ok(())
}
