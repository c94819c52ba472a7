mod platform;

fn main() {
    if let Err(err) = platform::run_app() {
        eprintln!("flaredash failed: {err}");
        std::process::exit(1);
    }
}
