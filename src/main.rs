//! contribgraph - Render a contributions calendar from a plain-text log

use clap::Parser;
use contribgraph::{
    cli::{Cli, Command, parse_date_arg},
    dates::describe_elapsed,
    error::Result,
    output::get_formatter,
    parser::load_file,
    report::CalendarReport,
    timezone::TimezoneConfig,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Quiet mode (the default) overrides RUST_LOG.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("contribgraph=info"))
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let as_of = match &cli.as_of {
        Some(date) => parse_date_arg(date)?,
        None => {
            let tz_config = TimezoneConfig::from_cli(cli.timezone.as_deref(), cli.utc)?;
            info!("Using timezone: {}", tz_config.display_name());
            tz_config.today()
        }
    };
    info!("Computing report as of {}", as_of);

    let colored = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && is_terminal::is_terminal(std::io::stdout());

    match cli.command() {
        Command::Elapsed { date } => {
            let date = parse_date_arg(&date)?;
            let description = describe_elapsed(date, as_of)?;
            let formatter = get_formatter(cli.json, Default::default(), colored);
            println!("{}", formatter.format_elapsed(date, as_of, &description));
        }
        command => {
            let log = load_file(&cli.log)?;
            let report = CalendarReport::build(&log, cli.adjacency(), as_of);
            let scale = cli.intensity_scale(report.max_daily)?;
            let formatter = get_formatter(cli.json, scale, colored);

            let output = if command == Command::Streaks {
                formatter.format_streaks(&report)
            } else {
                formatter.format_calendar(&report)
            };
            println!("{output}");
        }
    }

    Ok(())
}
