use clap::Parser;
use saarthi_locate::location::{LocationResolver, RideType};
use saarthi_locate::server;

/// Saarthi Locate v0.3 — location search and validation for ride booking.
///
/// Resolves free-text pickup/drop queries against the GraphHopper geocoding
/// API, restricted to Indian locations, with an offline airport gazetteer
/// as the fallback.
///
/// Examples:
///   saarthi "Ahmedabad"
///   saarthi "mundra" --ride-type airport
///   saarthi "mahal" --ride-type local
///   saarthi "Bhuj Airport" --validate
///   saarthi --serve --port 5000
#[derive(Parser)]
#[command(name = "saarthi", version, about, long_about = None)]
struct Cli {
    /// Free-text location query.
    #[arg(index = 1)]
    query: Option<String>,

    /// Booking flow: "airport", "local", or anything else for outstation.
    #[arg(long, default_value = "outstation")]
    ride_type: String,

    /// Validate the query as a single booking-leg location instead of
    /// searching for candidates.
    #[arg(long)]
    validate: bool,

    /// Offline mode: answer from the gazetteer only, no network calls.
    #[arg(long)]
    offline: bool,

    /// Run the HTTP server instead of a one-shot query.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// GraphHopper API key. Falls back to $GRAPHHOPPER_API_KEY.
    #[arg(long)]
    key: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let api_key = cli
        .key
        .clone()
        .or_else(|| std::env::var("GRAPHHOPPER_API_KEY").ok())
        .unwrap_or_default();

    if api_key.is_empty() && !cli.offline {
        eprintln!("Warning: no GraphHopper API key set; live geocoding will fail.");
        eprintln!("         Pass --key or set GRAPHHOPPER_API_KEY.");
    }

    let mut resolver = LocationResolver::new(api_key);
    if cli.offline {
        resolver.set_offline(true);
    }

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        server::start(&cli.host, cli.port, resolver).await;
        return;
    }

    // ── One-shot query ──────────────────────────────────────────

    let Some(query) = cli.query.as_deref() else {
        eprintln!("Error: No query given.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  saarthi \"Ahmedabad\"");
        eprintln!("  saarthi \"mundra\" --ride-type airport");
        eprintln!("  saarthi \"Bhuj Airport\" --validate");
        eprintln!("  saarthi --serve --port 5000");
        std::process::exit(1);
    };

    if cli.validate {
        match resolver.validate(query) {
            Ok(place) => {
                println!("{}", serde_json::to_string_pretty(&place).unwrap());
            }
            Err(e) => {
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        }
        return;
    }

    let ride_type = RideType::from_param(Some(&cli.ride_type));
    let outcome = resolver.search(query, ride_type);
    println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
}
