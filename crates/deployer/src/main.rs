use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = deployer::arguments::Arguments::parse();
    deployer::observe::initialize(&args.log_filter);
    tracing::info!("running deployment with validated arguments:\n{}", args);
    deployer::run(args).await
}
