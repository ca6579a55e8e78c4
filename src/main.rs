use clap::Parser;
use tptags::application::{CheckPolicyService, ValidateTagsService};
use tptags::cli::{format_default_tags, format_tag_list, Cli, Commands};
use tptags::domain::tags::default_tags;
use tptags::error::TptagsError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TptagsError> {
    match cli.command {
        Commands::Check { policy, quoted } => {
            let checked = CheckPolicyService::execute(&policy)?;
            print_tags(&checked.tags, quoted);
            Ok(())
        }
        Commands::Validate { tags, quoted } => {
            let validated = ValidateTagsService::execute(&tags)?;
            print_tags(&validated, quoted);
            Ok(())
        }
        Commands::Defaults => {
            print!("{}", format_default_tags(&default_tags()));
            Ok(())
        }
    }
}

fn print_tags(tags: &[String], quoted: bool) {
    print!("{}", format_tag_list(tags, quoted));
}
