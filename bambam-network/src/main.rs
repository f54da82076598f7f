use bambam_network::app::NetworkApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = NetworkApp::parse();
    match args.op.run() {
        Ok(summary) => {
            log::info!("bambam-network finished: {summary:?}");
            eprintln!("finished.");
        }
        Err(e) => {
            log::error!("bambam-network failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
