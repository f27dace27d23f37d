use clap::Parser;
use rxcheck::core::{ConfigProvider, OutcomeStatus};
use rxcheck::utils::{logger, validation::Validate};
use rxcheck::{CliConfig, InteractionChecker, RxNavSettings};

#[derive(Parser)]
#[command(name = "rxcheck-pair")]
#[command(about = "Check a single drug pair against RxNav from the terminal")]
struct Args {
    /// First drug name
    drug_a: String,

    /// Second drug name
    drug_b: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.config.verbose);

    let config = args.config.resolve()?;
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let settings = RxNavSettings::from_config(&config);
    let checker = InteractionChecker::from_settings(&settings, config.locale())?;
    let report = checker.check(&args.drug_a, &args.drug_b).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let heading = checker.messages().status_heading(report.status);
        println!("{} + {}: {}", report.drug_a, report.drug_b, heading);
        println!("{}", report.message);
        if let Some(interaction) = &report.interaction {
            let labels = checker.messages().form_labels();
            println!("{}: {}", labels.severity, interaction.severity);
            for explanation in &interaction.explanations {
                println!("  - {}", explanation);
            }
        }
    }

    let exit_code = match report.status {
        OutcomeStatus::Interaction | OutcomeStatus::NoInteraction => 0,
        OutcomeStatus::Error => 1,
        OutcomeStatus::NotFound => 2,
    };
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
