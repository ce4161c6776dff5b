// SPDX-License-Identifier: MPL-2.0
use super::options::ToastDefaults;
use crate::config::{Config, TickInterval};

/// Store-wide behavior resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StoreSettings {
    /// Values applied to fields a push does not override.
    pub defaults: ToastDefaults,
    /// Period of the per-toast progress tick.
    pub tick_interval: TickInterval,
}

impl From<&Config> for StoreSettings {
    fn from(config: &Config) -> Self {
        Self {
            defaults: ToastDefaults::from(config),
            tick_interval: config
                .tick_interval_ms
                .map(TickInterval::new)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Lifetime;

    #[test]
    fn settings_from_default_config_match_default_settings() {
        assert_eq!(StoreSettings::from(&Config::default()), StoreSettings::default());
    }

    #[test]
    fn settings_clamp_tick_interval() {
        let config = Config {
            duration_ms: Some(900),
            dismissable: None,
            pausable: None,
            tick_interval_ms: Some(0),
        };
        let settings = StoreSettings::from(&config);
        assert_eq!(settings.tick_interval, TickInterval::new(1));
        assert_eq!(settings.defaults.lifetime, Lifetime::from_millis(900));
    }
}
