use clap::Parser;
use geocity::{Coordinate, LocationResolver, OpenWeatherFetcher};

/// geocity — resolve city names to coordinates.
///
/// Queries the OpenWeatherMap direct-geocoding API. Repeat lookups for the
/// same city within one run are served from memory.
///
/// Requires OPENWEATHER_API_KEY in the environment.
///
/// Examples:
///   geocity Paris
///   geocity Paris Stockholm "New York"
///   geocity --json Tokyo
#[derive(Parser)]
#[command(name = "geocity", version, about, long_about = None)]
struct Cli {
    /// City names to resolve.
    #[arg(required = true)]
    cities: Vec<String>,

    /// Emit results as JSON to stdout.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let fetcher = OpenWeatherFetcher::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let resolver = LocationResolver::new(Box::new(fetcher));

    let mut results: Vec<(String, Coordinate)> = Vec::with_capacity(cli.cities.len());
    for city in &cli.cities {
        let coord = resolver.resolve(city).await.unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        results.push((city.clone(), coord));
    }

    if cli.json {
        let payload: Vec<serde_json::Value> = results
            .iter()
            .map(|(city, coord)| {
                serde_json::json!({
                    "city": city,
                    "latitude": coord.latitude,
                    "longitude": coord.longitude,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload).unwrap());
    } else {
        for (city, coord) in &results {
            println!("{}: {:.4}, {:.4}", city, coord.latitude, coord.longitude);
        }
    }
}
