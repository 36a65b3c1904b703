use std::sync::Arc;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use tokio::net::TcpListener;
use tokio::signal;

use herodex::{InMemoryDataStore, create_registry_router};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Args {
    #[arrrg(optional, "Host to bind the HTTP server")]
    host: Option<String>,
    #[arrrg(optional, "Port to bind the HTTP server")]
    port: Option<u16>,
    #[arrrg(flag, "Enable verbose logging")]
    verbose: bool,
}

const HELP_TEXT: &str = r#"herodexd - Herodex daemon

USAGE:
    herodexd [OPTIONS]

OPTIONS:
    --host <HOST>        Host to bind the HTTP server [default: 127.0.0.1]
    --port <PORT>        Port to bind the HTTP server [default: 8080]
    --verbose            Enable verbose logging

DESCRIPTION:
    Runs the Herodex daemon: an in-memory hero registry with power, hero,
    and team management endpoints mounted at the server root.

    State lives in memory only and is lost on restart.

    The server supports graceful shutdown via SIGTERM or Ctrl+C.

API ENDPOINTS:
    Powers:
      GET    /powers             List all powers
      POST   /powers             Create a power
      GET    /powers/{id}        Get a specific power
      POST   /powers/{id}        Replace a power
      DELETE /powers/{id}        Delete a power

    Heroes:
      GET    /heroes             List all heroes (?location= for exact match)
      POST   /heroes             Create a hero
      GET    /heroes/{id}        Get a specific hero
      POST   /heroes/{id}        Replace a hero
      DELETE /heroes/{id}        Delete a hero

    Teams:
      GET    /teams              List all teams
      POST   /teams              Create a team
      GET    /teams/{id}         Get a specific team
      POST   /teams/{id}         Replace a team
      DELETE /teams/{id}         Delete a team"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) = Args::from_command_line("USAGE: herodexd [OPTIONS]");

    if !free.is_empty() && free[0] == "help" {
        println!("{}", HELP_TEXT);
        return Ok(());
    }

    let config = ServerConfig::from_args(args);

    if config.verbose {
        println!("Herodex daemon starting with configuration:");
        println!("  Bind address: {}:{}", config.host, config.port);
    }

    let store = Arc::new(InMemoryDataStore::new());
    let app = create_registry_router(store);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    println!("🚀 Herodex daemon started successfully!");
    println!("📡 Server listening on: http://{}", addr);
    println!("🔄 Ready to accept API requests");

    if config.verbose {
        print_api_endpoints();
    }

    println!("💡 Use Ctrl+C or send SIGTERM for graceful shutdown");
    println!();

    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                eprintln!("❌ Server error: {}", e);
                std::process::exit(1);
            }
        }
        () = shutdown_signal => {
            println!();
            println!("🛑 Shutdown signal received, stopping server gracefully...");
            println!("👋 Herodex daemon stopped");
        }
    }

    Ok(())
}

struct ServerConfig {
    host: String,
    port: u16,
    verbose: bool,
}

impl ServerConfig {
    fn from_args(args: Args) -> Self {
        Self {
            host: args.host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: args.port.unwrap_or(8080),
            verbose: args.verbose,
        }
    }
}

fn print_api_endpoints() {
    println!();
    println!("📋 Available API endpoints:");
    println!();
    println!("  Powers:");
    println!("    GET    /powers             List all powers");
    println!("    POST   /powers             Create a power");
    println!("    GET    /powers/{{id}}        Get a specific power");
    println!("    POST   /powers/{{id}}        Replace a power");
    println!("    DELETE /powers/{{id}}        Delete a power");
    println!();
    println!("  Heroes:");
    println!("    GET    /heroes             List all heroes (?location= for exact match)");
    println!("    POST   /heroes             Create a hero");
    println!("    GET    /heroes/{{id}}        Get a specific hero");
    println!("    POST   /heroes/{{id}}        Replace a hero");
    println!("    DELETE /heroes/{{id}}        Delete a hero");
    println!();
    println!("  Teams:");
    println!("    GET    /teams              List all teams");
    println!("    POST   /teams              Create a team");
    println!("    GET    /teams/{{id}}         Get a specific team");
    println!("    POST   /teams/{{id}}         Replace a team");
    println!("    DELETE /teams/{{id}}         Delete a team");
    println!();
}
