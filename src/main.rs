use clap::Parser;
use supafix::{config, fixes, rpc};

/// Supafix - one-shot Supabase SQL admin fixer
///
/// Installs the `public.is_admin()` helper function by posting it to the
/// project's `exec_sql` RPC endpoint. Sends exactly one request and prints
/// the raw response, whatever the status.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Supabase project URL, e.g. https://<ref>.supabase.co
    #[arg(long, env = "SUPABASE_URL")]
    project_url: String,

    /// Service-role API key (prefer the env var over the flag)
    #[arg(long, env = "SUPABASE_SERVICE_KEY", hide_env_values = true)]
    service_key: String,

    /// SQL-executing RPC function exposed through PostgREST
    #[arg(long, env = "SUPABASE_RPC_FUNCTION", default_value = "exec_sql")]
    rpc_function: String,
}

impl From<Cli> for config::CliConfig {
    fn from(cli: Cli) -> Self {
        config::CliConfig {
            project_url: cli.project_url,
            service_key: cli.service_key,
            rpc_function: cli.rpc_function,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logger - defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load .env if present so credentials can stay out of the shell
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::AdminConfig::from_cli(cli.into())?;
    let client = rpc::RpcClient::new(&config);

    println!("Testing RPC execution...");
    println!("Attempting to create is_admin function...");
    println!("SQL: {}", fixes::IS_ADMIN_FUNCTION);

    let outcome = client.execute_sql(fixes::IS_ADMIN_FUNCTION).await?;
    println!("Response: {} - {}", outcome.status.as_u16(), outcome.body);

    Ok(())
}
