/// Print an error message with X
pub fn error(msg: &str) {
    eprintln!("  ✗ {}", msg);
}
