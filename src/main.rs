use clap::Parser;

#[derive(Parser)]
#[command(name = "wk", about = concat!("[7] weekly v", env!("CARGO_PKG_VERSION"), " - a week of tasks, one screen"), version)]
struct Cli {
    /// Run against a different data directory (default: ~/.weekly)
    #[arg(short = 'C', long = "data-dir")]
    data_dir: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = weekly::tui::run(cli.data_dir.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
