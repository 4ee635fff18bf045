use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use mdstyle::linter::{Diagnostic, Severity};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn parse_tree(input: &str) -> io::Result<markdown::mdast::Node> {
    mdstyle::parse(input).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file } => {
            let input = read_all(file.as_ref())?;
            let tree = parse_tree(&input)?;
            println!("{:#?}", tree);
            Ok(())
        }
        Commands::Lint { file, check } => {
            let start_dir = start_dir_for(&file)?;
            let (cfg, cfg_path) = mdstyle::config::load(cli.config.as_deref(), &start_dir)?;

            if let Some(path) = &cfg_path {
                log::debug!("Using config from: {}", path.display());
            } else {
                log::debug!("Using default config");
            }

            let input = read_all(file.as_ref())?;
            let tree = parse_tree(&input)?;
            let diagnostics = mdstyle::lint(&tree, &cfg);

            if diagnostics.is_empty() {
                if !check {
                    println!("No issues found");
                }
                return Ok(());
            }

            print_diagnostics(&diagnostics, file.as_ref());

            if check {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic], file: Option<&PathBuf>) {
    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
            Severity::Info => "\x1b[34minfo\x1b[0m",       // blue
        };

        println!(
            "{severity_str}[{}]: {} at {}:{}:{}",
            diag.code, diag.message, file_name, diag.location.line, diag.location.column
        );
    }

    println!("\nFound {} issue(s)", diagnostics.len());
}
