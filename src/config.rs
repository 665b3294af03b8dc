use std::time::Duration;

use clap::Parser;

use crate::progress::{DEFAULT_STEP, ProgressConfig};

/// Консольный калькулятор двух чисел.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Шаг анимации в процентах
    #[arg(long, default_value_t = DEFAULT_STEP, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub step: u32,

    /// Пауза между кадрами анимации, мс
    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    /// Не показывать анимацию
    #[arg(long)]
    pub no_progress: bool,

    /// Подробный журнал в stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Параметры анимации из аргументов командной строки.
    #[must_use]
    pub fn progress_config(&self) -> ProgressConfig {
        ProgressConfig {
            enabled: !self.no_progress,
            step: self.step,
            delay: Duration::from_millis(self.delay_ms),
        }
    }

    /// Директива журнала по умолчанию, если `RUST_LOG` не задан.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_animation_defaults() {
        let args = CliArgs::try_parse_from(["calculadora"]).unwrap();
        assert_eq!(args.progress_config(), ProgressConfig::default());
        assert_eq!(args.log_directive(), "warn");
    }

    #[test]
    fn parse_overrides() {
        let args = CliArgs::try_parse_from([
            "calculadora",
            "--step",
            "25",
            "--delay-ms",
            "0",
            "--no-progress",
            "-v",
        ])
        .unwrap();

        let config = args.progress_config();
        assert_eq!(config.step, 25);
        assert_eq!(config.delay, Duration::ZERO);
        assert!(!config.enabled);
        assert_eq!(args.log_directive(), "debug");
    }

    #[test]
    fn step_out_of_range_rejected() {
        assert!(CliArgs::try_parse_from(["calculadora", "--step", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["calculadora", "--step", "101"]).is_err());
    }
}
