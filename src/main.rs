fn main() {
    if let Err(err) = starmap_overlay::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
