use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-planner-api", version, about = "Smart recipe planner HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix applied to every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Tracing filter directive, overridden by RUST_LOG when set.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}
