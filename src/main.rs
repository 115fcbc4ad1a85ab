use kaggle_dl::cli::{Args, user_message};
use kaggle_dl::{CliDownloadTool, ToExitCode, run};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_legacy(std::env::args_os());

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };
    let tool = CliDownloadTool::from_config(&config.tools);

    match run(&args.params(), &config, &tool).await {
        Ok(summary) => {
            if let Some(output) = &summary.download {
                print!("{}", output.stdout);
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn fail(error: &kaggle_dl::Error) -> ExitCode {
    eprintln!("{}", user_message(error));
    ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
}
