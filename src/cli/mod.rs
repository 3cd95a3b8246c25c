pub mod confirm;
pub mod push;

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

#[derive(Debug, Parser)]
#[command(
    name = "repush",
    about = "Re-tag and re-push container images between registries",
    version
)]
pub struct Cli {
    /// Source image to pull
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub image: String,

    /// Destination repository, matched against "name" or "additionalNames"
    /// in the config. A value starting with "!" skips the config and pushes
    /// to the image that follows it.
    #[arg(
        short,
        long = "destination-repository",
        visible_alias = "destination",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub destination: String,

    /// Replace the destination image tag
    #[arg(short = 't', long)]
    pub override_tag: Option<String>,

    /// Push without asking to confirm the destination image
    #[arg(short, long)]
    pub force: bool,

    /// Container tool used to pull, tag and push (docker, podman)
    #[arg(
        short,
        long,
        env = "REPUSH_CONTAINER_TOOL",
        default_value = "docker",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub container_tool: String,

    /// Config file (default: config.json next to the executable, then
    /// repush/config.json in the user config directory)
    #[arg(long, env = "REPUSH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the destination image and exit without running the container tool
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
