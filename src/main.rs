//! Attendo launcher.

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    if let Err(err) = attendo_gui::run() {
        eprintln!("attendo: {}", err);
        std::process::exit(1);
    }
}

fn print_help() {
    println!("Attendo\n");
    println!("Usage: attendo [--help]\n");
    println!("Environment variables:");
    println!("  DB_PATH                   Database directory (default: ~/.cache/attendo/db)");
    println!("  ATTENDO_MIN_PASSWORD_LEN  Shortest accepted password (default: 6)");
    println!("  ATTENDO_COMPANY_NAME      Name shown on the home screen (default: Attendo)");
    println!("  ATTENDO_BACKEND_TRACE     Log per-command backend timings (default: off)");
    println!("  RUST_LOG                  Log filter (default: attendo_core=warn,attendo_gui=info)");
}
