use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rulid")]
#[command(version)]
#[command(about = "Build system and package manager for Rust")]
pub struct Cli {}
