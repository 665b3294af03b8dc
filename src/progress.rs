//! Косметическая анимация «вычисления».
//!
//! Печатает счётчик процентов от 0 до 100, перерисовывая строку через `\r`.
//! На результат никак не влияет.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Подпись анимации.
pub const LABEL: &str = "Calculando";

/// Шаг по умолчанию, в процентах.
pub const DEFAULT_STEP: u32 = 5;

/// Пауза между кадрами по умолчанию.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Параметры анимации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Рисовать ли анимацию вообще.
    pub enabled: bool,
    /// Приращение процентов за кадр. Ноль трактуется как 1.
    pub step: u32,
    /// Пауза после каждого кадра.
    pub delay: Duration,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step: DEFAULT_STEP,
            delay: DEFAULT_DELAY,
        }
    }
}

impl ProgressConfig {
    /// Анимация без пауз. Удобно для тестов.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Значения процентов для каждого кадра.
    ///
    /// Последний кадр всегда 100, даже если шаг не делит 100 нацело.
    ///
    /// ```
    /// use calculadora_rs::progress::ProgressConfig;
    ///
    /// let frames = ProgressConfig::default().frames();
    /// assert_eq!(frames.len(), 21);
    /// assert_eq!(frames.first(), Some(&0));
    /// assert_eq!(frames.last(), Some(&100));
    /// ```
    #[must_use]
    pub fn frames(&self) -> Vec<u32> {
        let step = self.step.max(1) as usize;
        let mut frames: Vec<u32> = (0..=100).step_by(step).collect();
        if frames.last() != Some(&100) {
            frames.push(100);
        }
        frames
    }

    /// Проигрывает анимацию в `output`.
    ///
    /// Каждый кадр сбрасывается в вывод до паузы, иначе перерисовка не видна.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`io::Error`] при ошибке записи.
    pub fn run<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if !self.enabled {
            tracing::debug!("анимация отключена");
            return Ok(());
        }

        let frames = self.frames();
        tracing::debug!(frames = frames.len(), delay = ?self.delay, "анимация началась");

        write!(output, "\n{LABEL}")?;
        for percent in frames {
            write!(output, "\r{LABEL}: {percent}%")?;
            output.flush()?;
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        writeln!(output)?;
        output.flush()?;

        tracing::debug!("анимация закончилась");
        Ok(())
    }
}
