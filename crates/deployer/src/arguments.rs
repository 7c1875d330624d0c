use {
    alloy::signers::local::PrivateKeySigner,
    clap::Parser,
    std::path::PathBuf,
    url::Url,
};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Directory holding the compiled Hardhat artifacts of the FarmDao
    /// contracts.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Private key of the account that pays for and ends up owning the
    /// deployment.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: PrivateKeySigner,

    /// Tracing filter directives.
    #[clap(long, env, default_value = "warn,deployer=debug,engine=debug")]
    pub log_filter: String,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "artifacts: {:?}", self.artifacts)?;
        writeln!(f, "private_key: SECRET")?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        Ok(())
    }
}
