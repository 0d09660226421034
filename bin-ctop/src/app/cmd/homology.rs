use itertools::Itertools;
use serde::Serialize;
use comptop_homology::{Chain, Simplex, SimplicialComplex};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    #[arg(short, long)]
    pub dim: Option<usize>,

    #[arg(short = 'g', long)]
    pub show_gens: bool,

    #[arg(short, long)]
    pub minimal: bool,

    #[arg(short, long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    dim: usize,
    rank: usize,
    generators: Vec<Vec<&'a Simplex>>,
}

pub struct App {
    args: Args,
    buff: String,
}

impl App {
    pub fn new(args: Args) -> Self {
        let buff = String::with_capacity(1024);
        App { args, buff }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let c = load_complex(&self.args.input)?;
        let Some(top) = c.dim() else {
            return err!("the complex is empty.")
        };

        let dims = match self.args.dim {
            Some(p) => {
                ensure!(p <= top, "dim {p} exceeds the top dimension {top}.");
                vec![p]
            },
            None => (0..=top).collect()
        };

        let summaries = dims.into_iter().map(|p|
            self.summary(&c, p)
        ).collect::<Result<Vec<_>, _>>()?;

        if self.args.json {
            return Ok(serde_json::to_string(&summaries)?)
        }

        for s in summaries.iter() {
            self.show(s);
        }

        Ok(self.flush())
    }

    fn summary<'a>(&self, c: &'a SimplicialComplex, p: usize) -> Result<Summary<'a>, Box<dyn std::error::Error>> {
        let h = c.homology_group(p)?;

        let generators = if self.args.show_gens || self.args.json {
            let basis = if self.args.minimal {
                h.minimal_basis()?
            } else {
                h.basis()?
            };
            basis.iter().map(|z: &Chain|
                z.simplices(c)
            ).collect::<Result<Vec<_>, _>>()?
        } else {
            vec![]
        };

        Ok(Summary { dim: p, rank: h.rank(), generators })
    }

    fn show(&mut self, s: &Summary) {
        let h = match s.rank {
            0 => "0".to_string(),
            1 => "Z/2".to_string(),
            r => format!("(Z/2)^{r}")
        };
        self.out(&format!("H_{} = {h}", s.dim));

        for (i, z) in s.generators.iter().enumerate() {
            self.out(&format!("  {i}: {}", z.iter().join(" + ")));
        }
    }

    fn out(&mut self, str: &str) {
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String {
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus() {
        let args = Args {
            input: Input { space: Some(Space::Torus), ..Default::default() },
            dim: Some(1),
            ..Default::default()
        };
        let res = dispatch(&args);
        assert_eq!(res.unwrap(), "H_1 = (Z/2)^2");
    }

    #[test]
    fn show_gens() {
        let args = Args {
            input: Input { input: Some("[[0,1],[0,2],[1,3],[2,3],[0,1,2]]".to_string()), ..Default::default() },
            dim: Some(1),
            show_gens: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        let lines = res.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "H_1 = Z/2");
        assert!(lines[1].starts_with("  0: "));
    }

    #[test]
    fn json() {
        let args = Args {
            input: Input { space: Some(Space::Torus), ..Default::default() },
            dim: Some(1),
            minimal: true,
            json: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&res).unwrap();

        assert_eq!(value[0]["dim"], 1);
        assert_eq!(value[0]["rank"], 2);
        assert_eq!(value[0]["generators"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn dim_out_of_range() {
        let args = Args {
            input: Input { space: Some(Space::Sphere), ..Default::default() },
            dim: Some(3),
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }
}
