use clap::Parser;
use std::error::Error;
use std::net::Ipv4Addr;
use std::time::Duration;

use p0f_client::wire::constants::DISTANCE_UNKNOWN;
use p0f_client::{Client, HostInfo, MatchQuality};

#[derive(Parser)]
#[command(name = "p0f-cli")]
#[command(about = "Query a running p0f daemon for cached host fingerprints")]
struct Cli {
    /// Path to the daemon API socket (p0f -s <path>)
    #[arg(long, default_value = "/var/run/p0f.sock")]
    socket: String,

    /// Socket read/write timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// IPv4 addresses to query
    #[arg(required = true)]
    addrs: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    println!("Connecting to {}", cli.socket);

    let mut client = Client::connect(&cli.socket)?;

    if let Some(secs) = cli.timeout {
        client.set_timeout(Some(Duration::from_secs(secs)))?;
    }

    for addr in &cli.addrs {
        let ip: Ipv4Addr = addr.parse()?;

        match client.query(&ip.octets()) {
            Ok(info) => print_info(addr, &info),
            Err(p0f_client::Error::NoMatch) => {
                println!("--- {} ---", addr);
                println!("no cached fingerprint for this host");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Prints one host report in the style of the client bundled with
/// p0f. Fields the daemon has no data for are skipped.
fn print_info(addr: &str, info: &HostInfo) {
    println!("--- {} ---", addr);

    let quality = match info.os_match_q {
        MatchQuality::Normal => "",
        MatchQuality::Fuzzy => " (fuzzy)",
        MatchQuality::Signature => " (generic signature)",
        MatchQuality::FuzzySignature => " (fuzzy, generic signature)",
    };

    if info.os_name.is_empty() {
        println!("os         = ???");
    } else if info.os_flavor.is_empty() {
        println!("os         = {}{}", info.os_name, quality);
    } else {
        println!("os         = {} {}{}", info.os_name, info.os_flavor, quality);
    }

    if !info.http_name.is_empty() {
        println!("http       = {} {}", info.http_name, info.http_flavor);
    }
    if !info.link_type.is_empty() {
        println!("link       = {}", info.link_type);
    }
    if !info.language.is_empty() {
        println!("language   = {}", info.language);
    }

    if info.distance != DISTANCE_UNKNOWN {
        println!("distance   = {} hops", info.distance);
    }

    if info.uptime_min > 0 {
        println!(
            "uptime     = {} days {} hrs {} min (modulo {} days)",
            info.uptime_min / 60 / 24,
            (info.uptime_min / 60) % 24,
            info.uptime_min % 60,
            info.up_mod_days
        );
    }

    match info.bad_sw {
        1 => println!("software   = possibly lying about User-Agent or Server"),
        2 => println!("software   = definitely lying about User-Agent or Server"),
        _ => {}
    }

    println!("first seen = {} (unix time)", info.first_seen);
    println!("last seen  = {} (unix time)", info.last_seen);
    println!("total conn = {}", info.total_conn);

    if info.last_nat > 0 {
        println!("last NAT   = {} (unix time)", info.last_nat);
    }
    if info.last_chg > 0 {
        println!("OS change  = {} (unix time)", info.last_chg);
    }
}
