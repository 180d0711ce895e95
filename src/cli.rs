use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tvrename")]
#[command(author, version, long_about = None)]
#[command(about = "Rename TV episode files to the canonical '<Show> SxxExx' naming scheme")]
pub struct Args {
    /// Show directory containing one folder per season (defaults to $TVRENAME_SHOW_DIR)
    pub show_dir: Option<PathBuf>,

    /// Show name to use instead of the directory name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write a JSON history of the performed renames into this directory
    #[arg(long, value_name = "DIR")]
    pub history: Option<PathBuf>,
}
