use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt
};

use precisionproblem::configuration::Configuration;
use precisionproblem::demonstrator::Demonstrator;

fn main() {
    // stdout 保留給報表，log 一律寫到 stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "precisionproblem=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let configuration = Configuration::standard();
    let demonstrator = Demonstrator::new(configuration.demonstration().clone());
    match demonstrator.report() {
        Ok(report) => print!("{}", report),
        Err(error) => tracing::error!("{}", error)
    }
}
