use clap::Parser;
use station_roulette::app::RouletteApp;

fn main() {
    env_logger::init();
    let args = RouletteApp::parse();
    match args.op.run() {
        Ok(out) => println!("{out}"),
        Err(e) => {
            log::error!("station-roulette failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
