use clap::Parser;

/// Command line options for the school visitors demo.
#[derive(Parser, Debug, Clone)]
#[command(name = "school-visitors")]
#[command(about = "Sends a doctor and a salesman round a school using the visitor pattern")]
pub struct Cli {
    /// Name of the doctor doing the health checkups
    #[arg(long, env = "SCHOOL_DOCTOR", default_value = "James")]
    pub doctor: String,

    /// Name of the salesman handing out school bags
    #[arg(long, env = "SCHOOL_SALESMAN", default_value = "John")]
    pub salesman: String,

    /// Wait for a line on stdin before exiting
    #[arg(long)]
    pub pause: bool,

    /// Log filter for stderr (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    pub no_color: bool,
}
