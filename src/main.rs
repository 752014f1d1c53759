use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gencpp::{Git, ScaffoldError, Scaffolder, Variant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gencpp", version, about = "Scaffold a CMake + Conan C++ project")]
struct Cli {
    /// Project name, also used as the directory name
    name: String,

    /// Package-manager integration for the generated build files
    #[arg(long, value_enum, env = "GENCPP_VARIANT", default_value_t)]
    variant: Variant,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with 2 on usage errors; this tool reports every failure as 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(e.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::TargetExists(_))) {
                println!("The project already exists");
            } else {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let scaffolder = Scaffolder::new(&cwd, &cli.name, cli.variant)?;

    println!("Creating project '{}'...", scaffolder.name());
    let scaffold = scaffolder.generate(&Git)?;

    for file in &scaffold.files {
        let display = file.strip_prefix(&cwd).unwrap_or(file);
        println!("Created {}", display.display());
    }
    print!("{}", scaffold.vcs_output);

    println!();
    println!("  cd {}", cli.name);
    println!("  cmake -S . -B build && cmake --build build");

    Ok(())
}
