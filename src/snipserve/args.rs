use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "snipserve",
    version,
    about = "An in-memory code snippet server with a browser-based editor"
)]
pub struct Cli {
    /// Port to listen on (falls back to $PORT, then 3000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (defaults to 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Production mode: suppress internal error details in responses
    #[arg(long)]
    pub production: bool,
}
