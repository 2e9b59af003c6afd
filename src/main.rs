use certserve::{server, Cli, Commands, JsonRoster, Result};
use clap::Parser;
use log::{error, info};
use std::net::SocketAddr;

fn main() {
    if let Err(e) = run() {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Inicializar logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Serve { roster, bind } => {
            let addr: SocketAddr = bind.parse().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid bind address `{}`: {}", bind, e),
                )
            })?;

            info!("Starting certificate service");
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(JsonRoster::new(roster), addr))?;
        }

        Commands::Issue {
            roster,
            email,
            key,
            output,
        } => {
            info!("Issuing single certificate");
            let doc = certserve::issue(&email, &key, &JsonRoster::new(roster))?;
            std::fs::write(&output, doc.bytes())?;
            println!("✓ Certificate created: {}", output);
        }

        Commands::Example { output } => {
            info!("Generating example roster");
            generate_example(&output)?;
            println!("✓ Example roster created: {}", output);
        }
    }

    Ok(())
}

fn generate_example(output: &str) -> Result<()> {
    // La clave de acceso es compartida entre participantes, no por usuario
    let roster = serde_json::json!([
        {
            "email": "juan.perez@example.com",
            "name": "Juan Pérez",
            "accessKey": "ABC123"
        },
        {
            "email": "maria.lopez@example.com",
            "name": "María López",
            "accessKey": "ABC123"
        }
    ]);

    let json = serde_json::to_string_pretty(&roster)?;
    std::fs::write(output, json)?;

    Ok(())
}
