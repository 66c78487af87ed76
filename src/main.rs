fn main() {
    if let Err(e) = wish_drift::core::Engine::run() {
        eprintln!("Scene failed to start: {}", e);
        std::process::exit(1);
    }
}
