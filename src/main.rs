use clap::Parser;
use genderize_form::app::{build_controller, session};
use genderize_form::config::cli::LogFormat;
use genderize_form::config::Command;
use genderize_form::core::FormView;
use genderize_form::utils::{logger, validation::Validate};
use genderize_form::{ActionStatus, CliConfig, FormError, TerminalView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let controller = match build_controller(&config, TerminalView::new()) {
        Ok(controller) => controller,
        Err(e) => fail(e),
    };

    let outcome = match &cli.command {
        Command::Submit { name } => {
            controller.view().type_name(name);
            controller.submit().await
        }
        Command::Save { name, gender } => {
            controller.view().type_name(name);
            controller.view().check((*gender).into());
            controller.save()
        }
        Command::Clear { name } => {
            // one-shot runs start with an empty selection, load it first
            controller
                .show_saved_value(name)
                .and_then(|_| controller.clear())
        }
        Command::Session => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run_session(&controller, stdin, &mut stdout)
                .await
                .map(|_| ActionStatus::Done)
        }
    };

    match outcome {
        Ok(ActionStatus::Rejected(reason)) => {
            std::process::exit(FormError::ValidationError(reason).exit_code())
        }
        Ok(ActionStatus::FetchFailed) => std::process::exit(3),
        Ok(_) => Ok(()),
        Err(e) => fail(e),
    }
}

fn fail(e: FormError) -> ! {
    tracing::error!("{}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
