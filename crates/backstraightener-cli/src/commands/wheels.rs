use backstraightener_core::{Config, Wheel};
use clap::Args;

#[derive(Args)]
pub struct WheelsArgs {
    /// Print bounds and labels as JSON
    #[arg(long)]
    json: bool,
}

fn wheel_json(name: &str, wheel: &Wheel) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "min": wheel.min,
        "max": wheel.top(),
        "labels": wheel.labels(),
    })
}

pub fn run(args: WheelsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let wheels = Config::load()?.wheels();
    let named = [
        ("hours", &wheels.hours),
        ("minutes", &wheels.minutes),
        ("seconds", &wheels.seconds),
    ];

    if args.json {
        let json: Vec<_> = named.iter().map(|(name, w)| wheel_json(name, w)).collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    for (name, wheel) in named {
        let labels = wheel.labels();
        let first = labels.first().map(String::as_str).unwrap_or("--");
        let last = labels.last().map(String::as_str).unwrap_or("--");
        println!("{name:<8} {first}..{last}");
    }
    println!("longest countdown: {}s", wheels.max_total_secs());
    Ok(())
}
