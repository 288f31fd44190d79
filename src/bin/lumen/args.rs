use std::env;
use std::io::Write;
use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Settings file to use [default: nearest _lumen.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<lumen_config::SiteSettings> {
        let settings = if let Some(config_path) = self.config.as_deref() {
            lumen_config::SiteSettings::from_file(config_path).with_context(|| {
                format!("Error reading settings file {}", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            lumen_config::SiteSettings::from_cwd(cwd)?
        };

        Ok(settings)
    }
}

pub(crate) fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.write_style(write_style(anstream::ColorChoice::global()));
    builder.format(|f, record| {
        let style = level_style(record.level());
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(
            f,
            "{}{:8}{} {}",
            style.render(),
            level,
            style.render_reset(),
            record.args()
        )
    });
    builder.init();
}

fn write_style(choice: anstream::ColorChoice) -> env_logger::WriteStyle {
    match choice {
        anstream::ColorChoice::AlwaysAnsi | anstream::ColorChoice::Always => {
            env_logger::WriteStyle::Always
        }
        anstream::ColorChoice::Never => env_logger::WriteStyle::Never,
        _ => env_logger::WriteStyle::Auto,
    }
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default().bold(),
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug => anstyle::AnsiColor::Blue.on_default(),
        log::Level::Trace => anstyle::AnsiColor::Cyan.on_default(),
    }
}
