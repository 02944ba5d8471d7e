//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Blog title used when none is given on the command line.
pub const DEFAULT_TITLE: &str = "Блуждающие мысли";

/// Author shown under the home page tagline.
pub const DEFAULT_AUTHOR: &str = "Мария";

/// Home page tagline.
pub const TAGLINE: &str = "Эссе о медленной жизни, творчестве и поиске смысла в обыденном.";

/// Site wide description meta.
pub const DESCRIPTION: &str =
    "Истории, идеи и размышления о жизни, творчестве и поиске смысла в повседневном.";

/// Command line configuration for the blog generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "wandering", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Blog title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Author name
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Render only the article with this slug
    #[arg(long, value_name = "SLUG")]
    pub article: Option<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Site identity shared by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub tagline: &'a str,
    pub description: &'a str,
}

impl Default for Site<'static> {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE,
            author: DEFAULT_AUTHOR,
            tagline: TAGLINE,
            description: DESCRIPTION,
        }
    }
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the output path exists but is not a directory, or if
    /// the title is blank.
    pub fn validate(&self) -> Result<()> {
        if self.output.exists() && !self.output.is_dir() {
            bail!(
                "Output path exists and is not a directory: {}",
                self.output.display()
            );
        }

        if self.title.trim().is_empty() {
            bail!("Blog title must not be empty");
        }

        Ok(())
    }

    /// Returns the site identity described by this configuration.
    pub fn site(&self) -> Site<'_> {
        Site {
            title: &self.title,
            author: &self.author,
            tagline: TAGLINE,
            description: DESCRIPTION,
        }
    }
}
