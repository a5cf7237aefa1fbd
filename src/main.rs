fn main() {
    if let Err(e) = composer_layout::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
