/// Version line printed by `fasi7 version`.
pub fn version_line() -> String {
    format!("fasi7 v{}", env!("CARGO_PKG_VERSION"))
}

pub fn print_version() {
    println!("{}", version_line());
}
