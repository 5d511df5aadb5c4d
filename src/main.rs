fn main() {
    // Startup failures leave the window hidden and still exit cleanly.
    if let Err(e) = letter3d::run() {
        eprintln!("[letter3d] {}", e);
    }
}
