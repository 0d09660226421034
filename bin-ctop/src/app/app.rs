use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{betti, euler, homology};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd,

    /// 1: info, 2: debug, 3: trace.
    #[arg(long, global = true, default_value = "0")]
    pub log: u8,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    Betti(betti::Args),
    Homology(homology::Args),
    Euler(euler::Args),
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

impl Cmd {
    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Cmd::Betti(args)    => betti::dispatch(args),
            Cmd::Homology(args) => homology::dispatch(args),
            Cmd::Euler(args)    => euler::dispatch(args),
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            guard_panic(|| self.args.command.dispatch())
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = comptop::util::log::init_simple_logger(l) {
            eprintln!("failed to init logger: {e}");
        }
    }
}
