use itertools::Itertools;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let c = load_complex(&args.input)?;

    let betti = if args.reduced {
        c.reduced_betti_numbers()?
    } else {
        c.betti_numbers()?
    };

    if args.json {
        return Ok(serde_json::to_string(&betti)?)
    }

    let res = betti.iter().enumerate().map(|(p, b)|
        format!("b_{p} = {b}")
    ).join("\n");

    Ok(res)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    #[arg(short, long)]
    pub reduced: bool,

    #[arg(short, long)]
    pub json: bool,
}
