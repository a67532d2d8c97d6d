use pulseheart::HeartConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = pulseheart::run(HeartConfig::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
