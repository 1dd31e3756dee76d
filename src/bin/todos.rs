use clap::Parser;
use perm_todo::application::services::Logger;
use perm_todo::infrastructure::config::Config;
use perm_todo::infrastructure::http_client::HyperHttpClient;
use perm_todo::infrastructure::logger::ConsoleLogger;
use perm_todo::presentation::cli::TodosCli;

/// Sends one request to the todos API and pretty-prints the JSON response.
///
/// The endpoint defaults to jsonplaceholder and can be pointed elsewhere with
/// `TODOS_ENDPOINT`.
#[tokio::main]
async fn main() {
    let cli = TodosCli::parse();
    let logger = ConsoleLogger;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            logger.error(&format!("{:#}", err));
            std::process::exit(1);
        }
    };
    let service = HyperHttpClient::new().create_todo_service(config.endpoint.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli.run(&service, &config, &logger, &mut out).await {
        logger.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
