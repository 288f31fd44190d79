use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded settings
    Config {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints a link for each contact the author filled in
    Contacts {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the navigation menu, in display order
    Menu {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints how many index pages a number of posts needs
    Pages {
        /// Total number of posts
        total_posts: usize,

        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Yaml,
    Json,
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { format, config } => {
                let settings = config.load_config()?;
                let rendered = match format {
                    OutputFormat::Yaml => settings.to_yaml()?,
                    OutputFormat::Json => settings.to_json()?,
                };
                println!("{}", rendered.trim_end());
            }
            Self::Contacts { config } => {
                let settings = config.load_config()?;
                for (platform, href) in settings.author.contact_links() {
                    println!("{platform}\t{href}");
                }
            }
            Self::Menu { config } => {
                let settings = config.load_config()?;
                for item in &settings.menu {
                    println!("{}\t{}", item.label, settings.prefixed_path(&item.path));
                }
            }
            Self::Pages {
                total_posts,
                config,
            } => {
                let settings = config.load_config()?;
                log::debug!(
                    "{} posts at {} per page",
                    total_posts,
                    settings.posts_per_page
                );
                println!("{}", settings.page_count(*total_posts));
            }
        }

        Ok(())
    }
}
