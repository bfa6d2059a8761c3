use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection URL to operate on, overrides the one from config.toml.
    #[arg(long)]
    pub url: Option<String>,

    /// Check whether the target database exists.
    #[arg(long)]
    pub exists: bool,

    /// Create the target database.
    #[arg(long)]
    pub create: bool,

    /// Drop the target database.
    #[arg(long)]
    pub drop: bool,

    /// Encoding used when creating the database.
    #[arg(long, default_value = "utf8")]
    pub encoding: String,

    /// PostgreSQL template to create the database from.
    #[arg(long)]
    pub template: Option<String>,

    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
}
