mod app;
mod config;
mod session;
mod surface;
mod ui;

fn main() {
    env_logger::init();
    if let Err(e) = app::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
