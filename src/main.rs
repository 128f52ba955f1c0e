use azure_arm_client::output::{print_resource_groups, print_subscriptions};
use azure_arm_client::{ArmClient, ClientConfig};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    log::info!("#Start main()");

    let config = ClientConfig::from_env();
    let session = ArmClient::new(config)?.authenticate().await?;

    let subscriptions = session.subscriptions().await?;
    print_subscriptions(&subscriptions, session.subscription_id());

    let groups = session.list_resource_groups().await?;
    print_resource_groups(&groups);

    // Optional resource group name to show in detail.
    if let Some(name) = std::env::args().nth(1) {
        let rg = session.resource_group_info(Some(name.as_str())).await?;
        println!("{}", serde_json::to_string_pretty(&rg)?);
    }

    Ok(())
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::warn!("log4rs.yml not found, logging to console");
    Ok(())
}
