use std::time::Duration;

pub const FLIP_BACK_DELAY_MS: u64 = 1000;
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const SEED_ENV: &str = "MEMORIA_SEED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub flip_back_delay: Duration,
    pub tick_interval: Duration,
    /// Fixed shuffle seed. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            flip_back_delay: Duration::from_millis(FLIP_BACK_DELAY_MS),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        GameConfig {
            seed: parse_seed(std::env::var(SEED_ENV).ok().as_deref()),
            ..Self::default()
        }
    }
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_one_second_timers() {
        let config = GameConfig::default();
        assert_eq!(config.flip_back_delay, Duration::from_secs(1));
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seed_parsing() {
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some("  7 \n")), Some(7));
        assert_eq!(parse_seed(Some("")), None);
        assert_eq!(parse_seed(Some("-3")), None);
        assert_eq!(parse_seed(Some("seed")), None);
        assert_eq!(parse_seed(None), None);
    }
}
