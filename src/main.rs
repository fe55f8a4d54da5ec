use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "bad-password",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a secure, memorable password using the XKCD method",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    // Help, version and usage errors all go to stderr
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{}", err.render());
            std::process::exit(err.exit_code());
        }
    };

    bad_password::logging::setup_logging(cli.verbose)?;

    commands::generate::execute(&cli.generate)
}
