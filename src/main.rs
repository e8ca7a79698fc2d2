//! Fleetmon CLI - exercise the Fleetmon monitoring API from the command line.
//!
//! Each subcommand maps to exactly one API call and prints the result as
//! pretty JSON. Connection settings come from the config file, overridable
//! via `FLEETMON_URL` / `FLEETMON_TOKEN` or the `--url` flag.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use fleetmon::api::types::{
    ContainerDataRequest, LoginRequest, RegisterRequest, ServerRegisterRequest, ServerStatus,
};
use fleetmon::{ApiTransport, AuthApi, Config, ContainersApi, ServersApi};

#[derive(Parser)]
#[command(name = "fleetmon", version, about = "Client for the Fleetmon monitoring backend")]
struct Cli {
    /// Backend base URL (overrides config file and FLEETMON_URL).
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and print the session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Persist the token to the config file for later commands.
        #[arg(long)]
        save: bool,
    },
    /// Register a new user account.
    RegisterUser {
        #[arg(long)]
        user_name: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "user")]
        user_type: String,
    },
    /// Register a server for monitoring.
    RegisterServer {
        #[arg(long)]
        registrator_id: i64,
        #[arg(long)]
        name: String,
        /// SSH password for the server (encrypted by the backend).
        #[arg(long)]
        password: String,
        #[arg(long)]
        ip_address: String,
        #[arg(long)]
        port: u16,
        /// One of: up, down, decommissioned, inactive.
        #[arg(long, default_value = "up")]
        status: ServerStatus,
    },
    /// List all registered servers.
    Servers,
    /// Aggregate snapshot (health + containers) for one server.
    Monitor { server_id: i64 },
    /// Aggregate snapshots for every server.
    MonitorAll,
    /// Latest health sample for one server.
    Health { server_id: i64 },
    /// Container inventory for one server.
    Containers { server_id: i64 },
    /// Trigger a health/inventory collection sweep across all servers.
    CollectAll,
    /// Delete a server.
    DeleteServer { server_id: i64 },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config.server_url = url;
    }

    let transport = ApiTransport::new(config.server_url.clone())?;
    if let Some(token) = &config.token {
        transport.set_bearer_token(token.clone());
    }

    match cli.command {
        Command::Login {
            username,
            password,
            save,
        } => {
            let auth = AuthApi::new(transport);
            let token = auth.login(&LoginRequest { username, password }).await?;

            if save {
                config.token = Some(token.access_token.clone());
                config.save()?;
                log::info!("token saved to config file");
            }

            print_json(&token)?;
        }
        Command::RegisterUser {
            user_name,
            first_name,
            last_name,
            email,
            password,
            user_type,
        } => {
            let auth = AuthApi::new(transport);
            let user = auth
                .register(&RegisterRequest {
                    user_name,
                    first_name,
                    last_name,
                    email,
                    password,
                    user_type,
                })
                .await?;
            print_json(&user)?;
        }
        Command::RegisterServer {
            registrator_id,
            name,
            password,
            ip_address,
            port,
            status,
        } => {
            let servers = ServersApi::new(transport);
            let server = servers
                .register(&ServerRegisterRequest {
                    registrator_id,
                    name,
                    password,
                    ip_address,
                    port,
                    status,
                })
                .await?;
            print_json(&server)?;
        }
        Command::Servers => {
            print_json(&ServersApi::new(transport).get_servers().await?)?;
        }
        Command::Monitor { server_id } => {
            let snapshot = ServersApi::new(transport)
                .get_server_with_containers(server_id)
                .await?;
            print_json(&snapshot)?;
        }
        Command::MonitorAll => {
            let snapshots = ServersApi::new(transport)
                .get_all_servers_with_containers()
                .await?;
            print_json(&snapshots)?;
        }
        Command::Health { server_id } => {
            let health = ServersApi::new(transport).get_server_health(server_id).await?;
            print_json(&health)?;
        }
        Command::Containers { server_id } => {
            let containers = ContainersApi::new(transport)
                .get_container_data(&ContainerDataRequest { server_id })
                .await?;
            print_json(&containers)?;
        }
        Command::CollectAll => {
            let summary = ServersApi::new(transport).collect_all().await?;
            println!("Collection sweep triggered.");
            print_json(&summary)?;
        }
        Command::DeleteServer { server_id } => {
            ServersApi::new(transport).delete_server(server_id).await?;
            println!("Server {server_id} deleted.");
        }
    }

    Ok(())
}
