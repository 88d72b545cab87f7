use clap::Parser;
use tagtrail::application::init::init;
use tagtrail::application::{ConfigService, HistoryService, TagService};
use tagtrail::cli::{
    format_checkpoint, format_edit_report, format_history, format_tag_list, Cli, Commands,
};
use tagtrail::error::TagtrailError;
use tagtrail::infrastructure::FileSystemRepository;
use tagtrail::telemetry;

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<i32, TagtrailError> {
    match cli.command {
        Commands::Init { path, owner } => {
            let config = init(&path, owner)?;
            println!("Initialized tagtrail at {}", path.display());
            println!("Owner: {}", config.owner);
            Ok(0)
        }
        Commands::Add { names } => {
            let service = TagService::new(FileSystemRepository::discover()?);
            println!("{}", format_edit_report(&service.add(&names)?));
            Ok(0)
        }
        Commands::Delete { names } => {
            let service = TagService::new(FileSystemRepository::discover()?);
            println!("{}", format_edit_report(&service.delete(&names)?));
            Ok(0)
        }
        Commands::Set { names } => {
            let service = TagService::new(FileSystemRepository::discover()?);
            println!("{}", format_edit_report(&service.set(&names)?));
            Ok(0)
        }
        Commands::Has { name } => {
            let service = TagService::new(FileSystemRepository::discover()?);
            if service.has(&name)? {
                println!("yes");
                Ok(0)
            } else {
                println!("no");
                Ok(1)
            }
        }
        Commands::List { known } => {
            let service = TagService::new(FileSystemRepository::discover()?);
            let tags = if known {
                service.known()?
            } else {
                service.list()?
            };
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(0)
        }
        Commands::Checkpoint => {
            let service = HistoryService::new(FileSystemRepository::discover()?);
            println!("{}", format_checkpoint(service.checkpoint()?));
            Ok(0)
        }
        Commands::History { number } => {
            let service = HistoryService::new(FileSystemRepository::discover()?);
            match number {
                Some(key) => {
                    let snapshot = service.version(key)?;
                    println!("{}", format_tag_list(&snapshot).trim_end());
                }
                None => {
                    println!("{}", format_history(&service.versions()?).trim_end());
                }
            }
            Ok(0)
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("owner = {}", config.owner);
                println!("auto_checkpoint = {}", config.auto_checkpoint);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: tagtrail config [--list | <key> [<value>]]");
                println!("Valid keys: owner, auto_checkpoint, created");
            }
            Ok(0)
        }
    }
}
