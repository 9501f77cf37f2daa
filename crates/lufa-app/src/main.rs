use eyre::Result;
use lufa_app::controller::{Controller, ExportSettings};
use lufa_app::{aws, config, terminal};
use lufa_bedrock::client::PlanClient;
use lufa_bedrock::generator::BedrockGenerator;
use lufa_export::styles::Theme;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_or_init()?;
    let info = config::config_info(&config);
    tracing::info!(
        region = %info.region,
        model_id = %info.model_id,
        credentials = %info.credential_type,
        profile = ?info.validation_profile,
        output_dir = %info.output_dir,
        "configuration loaded"
    );

    let sdk_config = aws::sdk_config(&config).await;
    match aws::caller_identity(&sdk_config).await {
        Ok(identity) => tracing::info!(caller = %identity, "credentials valid"),
        Err(e) => tracing::warn!(error = %e, "credential check failed"),
    }

    let client = PlanClient::new(
        BedrockGenerator::new(&sdk_config, &config.model_id),
        config.validation_profile.into(),
    );
    let mut controller = Controller::new(
        client,
        ExportSettings {
            output_dir: config.output_dir(),
            theme: Theme::default(),
            geometry: config.page_geometry(),
        },
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    terminal::run(&mut controller, stdin, &mut stdout).await
}
