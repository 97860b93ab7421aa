use clap::Parser;
use docker_tag_publish::core::command::program_dir;
use docker_tag_publish::utils::{logger, validation::Validate};
use docker_tag_publish::{
    parse_image_reference, CliConfig, ProcessDispatcher, PublishEngine, PublishError,
};
use std::path::PathBuf;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        fail(e);
    }
}

async fn run(config: CliConfig) -> Result<(), PublishError> {
    let Some(image_name) = config.image_name.as_deref() else {
        // The usage line goes to stdout, nothing else is printed.
        println!("{}", PublishError::MissingArgument.user_friendly_message());
        std::process::exit(PublishError::MissingArgument.exit_code());
    };

    config.validate()?;

    let image = parse_image_reference(image_name)?;

    let helper_dir = match &config.helper_dir {
        Some(dir) => PathBuf::from(dir),
        None => program_dir()?,
    };
    tracing::debug!("Helper directory: {}", helper_dir.display());

    let engine = PublishEngine::new(ProcessDispatcher::new(), helper_dir)
        .with_policy(config.policy())
        .with_dry_run(config.dry_run);

    let mut stdout = std::io::stdout();
    engine.run(&image, &mut stdout).await?;

    Ok(())
}

fn fail(e: PublishError) -> ! {
    tracing::debug!("Exiting after error: {:?}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
