use clap::Parser;
use curriculum::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    init_tracing(global.quiet, global.verbose)?;

    match cli.command {
        Commands::Init(args) => curriculum::cli::commands::init::run(args, &global),
        Commands::Validate(args) => curriculum::cli::commands::validate::run(args, &global),
        Commands::Config(cmd) => curriculum::cli::commands::config::run(cmd, &global),
        Commands::Syllabus(cmd) => curriculum::cli::commands::syllabus::run(cmd, &global),
        Commands::Completions(args) => curriculum::cli::commands::completions::run(args),
    }
}

/// Log to stderr, filtered by `CURRICULUM_LOG` when set
fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CURRICULUM_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| miette::miette!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
