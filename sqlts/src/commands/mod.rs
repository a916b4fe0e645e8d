mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;
use miette::Diagnostic;

/// Extension trait for exiting on schema and generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sqlts")]
#[command(version)]
#[command(about = "Generate typed TypeScript data-access modules from a SQLite schema")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}
