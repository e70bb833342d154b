//! CLI command implementations.

use console::style;

use crate::config::Settings;
use crate::dataset::BinSet;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    // Load the dataset first; serving without it is pointless.
    println!(
        "{} Loading bin dataset from {}...",
        style("→").cyan(),
        settings.dataset_path.display()
    );
    let bins = match BinSet::load(&settings.dataset_path) {
        Ok(bins) => {
            println!("  {} {} bins loaded", style("✓").green(), bins.len());
            bins
        }
        Err(e) => {
            eprintln!("  {} Failed to load dataset: {}", style("✗").red(), e);
            return Err(anyhow::anyhow!("Dataset load failed: {}", e));
        }
    };

    println!(
        "{} Starting binfinder server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(bins, &host, port).await
}

/// Print every bin in the dataset.
pub fn cmd_list(settings: &Settings) -> anyhow::Result<()> {
    let bins = BinSet::load(&settings.dataset_path)?;

    println!(
        "{} {} bins in {}",
        style("→").cyan(),
        bins.len(),
        settings.dataset_path.display()
    );
    for bin in bins.all() {
        println!(
            "  {:>3}  {}  ({:.6}, {:.6})  {}",
            bin.id,
            style(&bin.name).green(),
            bin.lat,
            bin.lng,
            bin.description
        );
    }

    Ok(())
}

/// Print the bin nearest to the given coordinate.
pub fn cmd_nearest(settings: &Settings, lat: f64, lng: f64) -> anyhow::Result<()> {
    let bins = BinSet::load(&settings.dataset_path)?;
    let result = bins.nearest(lat, lng);

    match result.bin {
        Some(bin) => {
            println!(
                "{} {} (#{}): {}",
                style("✓").green(),
                style(&bin.name).green(),
                bin.id,
                bin.description
            );
            println!(
                "  {:.0} m away, bearing {:.0}°  ({:.6}, {:.6})",
                result.distance_meters, result.bearing_degrees, bin.lat, bin.lng
            );
        }
        None => {
            println!("{} The dataset is empty", style("✗").red());
        }
    }

    Ok(())
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 3030))
}
