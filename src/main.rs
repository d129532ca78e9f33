fn main() {
  if let Err(e) = athlete_os_lib::run() {
    eprintln!("athlete-os: {}", e);
    std::process::exit(1);
  }
}
