mod ops;
mod workflow;

use krest_client::GatewayClient;

use crate::config::{Commands, Effective};
use crate::error::CliError;

pub async fn dispatch(command: Commands, eff: &Effective) -> Result<(), CliError> {
    let client = GatewayClient::new(&eff.gateway)?;
    let mut out = std::io::stdout().lock();

    match command {
        Commands::Run(args) => workflow::run(&client, &args, &mut out).await,
        Commands::ClusterId => ops::cluster_id(&client, &mut out).await,
        Commands::CreateConsumer => ops::create_consumer(&client, &mut out).await,
        Commands::CreateTopic(args) => ops::create_topic(&client, &args, &mut out).await,
        Commands::Subscribe(args) => ops::subscribe(&client, &args, &mut out).await,
        Commands::Produce => ops::produce(&client, &mut out).await,
        Commands::Read(args) => ops::read(&client, &args, &mut out).await,
    }
}
