use std::collections::HashMap;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let c = load_complex(&args.input)?;

    let Some(values) = &args.values else {
        return Ok(format!("χ = {}", c.euler_char()))
    };

    let values = serde_json::from_str::<HashMap<usize, i64>>(values)?;
    ensure!(values.values().all(|&v| v >= 0), "values must be non-negative.");

    let b = values.values().copied().max().unwrap_or(0);
    let f = |v: usize| values.get(&v).copied().unwrap_or(0);
    let res = c.euler_integral(0, b, f);

    if args.json {
        return Ok(serde_json::to_string(&res)?)
    }

    Ok(format!("∫ f dχ = {res}"))
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    /// Values of f on vertices as a JSON object, e.g. '{"0": 1, "3": 2}'.
    /// Vertices not listed are 0.
    #[arg(short, long)]
    pub values: Option<String>,

    #[arg(short, long)]
    pub json: bool,
}
