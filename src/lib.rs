pub mod dynamics;
pub mod game;
pub mod save;
pub mod search;

/// Payoffs, quality scores, and welfare products.
pub type Utility = f64;
/// Demand weights and exposure shares.
pub type Probability = f64;
/// Index of a player within a strategy profile.
pub type Player = usize;
/// Index of a topic a player may target.
pub type Topic = usize;

/// Number of players competing for exposure.
pub const N: usize = 2;
/// Lower bound of the uniform quality draw.
pub const MIN_QUALITY: Utility = 0.;
/// Upper bound (exclusive) of the uniform quality draw.
pub const MAX_QUALITY: Utility = 10.;
/// Topics available to target in the default search.
pub const TOPIC_COUNT: usize = 3;
/// Sampled games per search before giving up.
pub const TRIAL_LIMIT: usize = 1000;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
