// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::Write;
use std::path::PathBuf;

use conceptdocs::app_config::{self, Config};
use conceptdocs::app_controller::{Controller, OutputFormat};
use conceptdocs::errors::AppError;
use conceptdocs::language_utils::Locale;
use conceptdocs::render::render_to_text;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

// Accepts ISO 639-1 and 639-2 codes, e.g. `es`, `spa`, `EN`
fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::from_code(value).map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every concept with its title
    List {
        /// Locale of the titles (defaults to the configured locale)
        #[arg(short, long, value_parser = parse_locale)]
        locale: Option<Locale>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: CliOutputFormat,
    },

    /// Render one concept
    Show {
        /// Slug of the concept, e.g. 'css-flexbox'
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Locale to render in (defaults to the configured locale)
        #[arg(short, long, value_parser = parse_locale)]
        locale: Option<Locale>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: CliOutputFormat,

        /// Leave out sections that fail to render instead of failing
        #[arg(long)]
        skip_broken: bool,
    },

    /// Render every concept into a directory
    Export {
        /// Directory the rendered files are written to
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Locale to render in (defaults to the configured locale)
        #[arg(short, long, value_parser = parse_locale)]
        locale: Option<Locale>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: CliOutputFormat,
    },

    /// Check every concept and fail if any has an error
    Validate,

    /// Generate shell completions for conceptdocs
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// conceptdocs - bilingual programming concept documentation
#[derive(Parser, Debug)]
#[command(name = "conceptdocs")]
#[command(version)]
#[command(about = "Render bilingual programming concept documentation")]
#[command(long_about = "conceptdocs renders curated programming concepts in Spanish or English.

EXAMPLES:
    conceptdocs list                              # List concepts in the default locale
    conceptdocs show css-flexbox --locale es      # Render a concept in Spanish
    conceptdocs show css-box-model -f json        # Render tree as JSON
    conceptdocs export out/ --locale en           # Write every concept to out/
    conceptdocs --content-dir ./concepts validate # Check extra concept files
    conceptdocs completions bash > conceptdocs.bash

CONFIGURATION:
    Configuration is stored in conceptdocs.json by default. You can specify a
    different file with --config. If the file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conceptdocs.json", global = true)]
    config: PathBuf,

    /// Directory of additional concept files
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger with the most verbose filter; the effective
    // level is lowered once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "conceptdocs", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::List { locale, format } => run_list(&controller, locale, format.into()),
        Commands::Show {
            slug,
            locale,
            format,
            skip_broken,
        } => run_show(&controller, &slug, locale, format.into(), skip_broken),
        Commands::Export {
            output_dir,
            locale,
            format,
        } => {
            let locale = controller.locale_or_default(locale);
            let written = controller.export_all(&output_dir, locale, format.into())?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Validate => run_validate(&controller),
        Commands::Completions { .. } => Ok(()),
    }
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let (mut config, found) = Config::load_or_default(&cli.config)?;

    if !found {
        // Create default configuration if not exists
        warn!("Config file not found at {:?}, creating default config.", cli.config);
        config
            .save(&cli.config)
            .with_context(|| format!("Failed to write default config to file: {:?}", cli.config))?;
    }

    // Override config with CLI options if provided
    if let Some(dir) = &cli.content_dir {
        config.content_dir = Some(dir.clone());
    }

    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }

    config.validate().context("Configuration validation failed")?;

    Ok(config)
}

fn run_list(controller: &Controller, locale: Option<Locale>, format: OutputFormat) -> Result<()> {
    let locale = controller.locale_or_default(locale);
    let concepts = controller.list_concepts(locale)?;
    info!("{} concept(s) in {}", concepts.len(), locale.native_name());

    match format {
        OutputFormat::Text => {
            for concept in &concepts {
                println!("{:<24} {}", concept.slug, concept.title);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&concepts)?);
        }
    }

    Ok(())
}

fn run_show(
    controller: &Controller,
    slug: &str,
    locale: Option<Locale>,
    format: OutputFormat,
    skip_broken: bool,
) -> Result<()> {
    let locale = controller.locale_or_default(locale);

    if !skip_broken {
        let output = controller.render_concept_as(slug, locale, format)?;
        print!("{}", output);
        return Ok(());
    }

    let render = controller.render_concept_isolated(slug, locale)?;
    for failure in &render.failures {
        error!("Section {} of '{}' skipped: {}", failure.index, slug, failure.error);
    }

    match format {
        OutputFormat::Text => print!("{}", render_to_text(&render.node)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&render.node)?),
    }

    Ok(())
}

fn run_validate(controller: &Controller) -> Result<()> {
    let reports = controller.validate_all();
    let mut failed = 0;

    for report in &reports {
        for issue in &report.issues {
            if issue.is_error() {
                error!("{}: {}", report.slug, issue);
            } else {
                warn!("{}: {}", report.slug, issue);
            }
        }

        if report.has_errors() {
            failed += 1;
        }
        println!("{}", report.summary());
    }

    if failed > 0 {
        return Err(AppError::ValidationFailed {
            failed,
            total: reports.len(),
        }
        .into());
    }

    info!("All {} concept(s) passed validation", reports.len());
    Ok(())
}
