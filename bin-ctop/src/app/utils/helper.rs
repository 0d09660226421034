use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use comptop_homology::{SimplicialComplex, spaces, obj::read_obj};
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Space {
    Torus,
    Annulus,
    Mobius,
    Sphere,
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Input {
    /// A `.obj` or `.json` file, or an inline JSON array of simplices.
    pub input: Option<String>,

    #[arg(short, long)]
    pub space: Option<Space>,
}

pub fn load_complex(input: &Input) -> Result<SimplicialComplex, Box<dyn std::error::Error>> {
    match (&input.input, input.space) {
        (Some(_), Some(_)) => err!("give either an input or `--space`, not both."),
        (None, None)       => err!("no input given."),
        (None, Some(s))    => Ok(load_space(s)),
        (Some(s), None)    => load_input(s),
    }
}

pub fn load_space(space: Space) -> SimplicialComplex {
    match space {
        Space::Torus   => spaces::torus(),
        Space::Annulus => spaces::annulus(),
        Space::Mobius  => spaces::mobius_strip(),
        Space::Sphere  => spaces::sphere(),
    }
}

fn load_input(input: &String) -> Result<SimplicialComplex, Box<dyn std::error::Error>> {
    if let Ok(bases) = serde_json::from_str::<Vec<Vec<usize>>>(input) {
        return from_bases(bases)
    }

    let path = Path::new(input);
    match path.extension().and_then(|e| e.to_str()) {
        Some("obj") => {
            let file = File::open(path)?;
            read_obj(BufReader::new(file))
        },
        Some("json") => {
            let data = std::fs::read_to_string(path)?;
            let bases = serde_json::from_str::<Vec<Vec<usize>>>(&data)?;
            from_bases(bases)
        },
        _ => err!("invalid input: '{}'", input)
    }
}

fn from_bases(bases: Vec<Vec<usize>>) -> Result<SimplicialComplex, Box<dyn std::error::Error>> {
    ensure!(bases.iter().all(|b| !b.is_empty()), "input contains an empty simplex.");
    Ok(SimplicialComplex::from_bases(bases))
}
