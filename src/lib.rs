//! # calculadora_rs
//!
//! Консольный калькулятор двух чисел.
//!
//! Один запуск проходит три шага по порядку:
//! 1. [`input`] — запрашивает первый операнд, символ операции и второй операнд.
//! 2. [`progress`] — показывает анимацию процентов.
//! 3. [`operation`] — вычисляет `+`, `-`, `*` или `/` и печатает результат
//!    с двумя знаками после запятой либо сообщение об ошибке.
//!
//! # Пример использования
//!
//! ```
//! use std::io::Cursor;
//!
//! use calculadora_rs::{progress::ProgressConfig, run_session};
//!
//! let mut out = Vec::new();
//! let outcome = run_session(Cursor::new("10 + 5\n"), &mut out, &ProgressConfig::instant()).unwrap();
//! assert_eq!(outcome.line(), "Resultado: 15.00");
//! ```

pub mod config;
pub mod input;
pub mod operation;
pub mod progress;

use std::io::{self, BufRead, Write};

use input::{InputError, Operands, Scanner};
use operation::EvalError;
use progress::ProgressConfig;

/// Заголовок, печатаемый перед первым приглашением.
pub const BANNER: &str = "Calculadora básica";

/// Общий тип ошибки калькулятора.
///
/// Деление на ноль и неизвестная операция сюда не входят: это обычный
/// исход запуска, см. [`Outcome`].
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка чтения ввода.
    #[error("{0}")]
    Input(#[from] InputError),

    /// Ошибка записи вывода.
    #[error("ошибка вывода: {0}")]
    Io(#[from] io::Error),
}

/// Итог одного запуска.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Прочитанные значения.
    pub operands: Operands,
    /// Результат вычисления или ошибка предметной области.
    pub result: Result<f64, EvalError>,
}

impl Outcome {
    /// Строка, которую видит пользователь.
    #[must_use]
    pub fn line(&self) -> String {
        operation::render(&self.result)
    }
}

/// Выполняет один запуск калькулятора поверх произвольных ввода и вывода.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] только при сбоях ввода-вывода.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    progress: &ProgressConfig,
) -> Result<Outcome, CalcError> {
    writeln!(output, "{BANNER}")?;

    let mut scanner = Scanner::new(input);
    let operands = input::collect(&mut scanner, output)?;

    progress.run(output)?;

    let result = operation::dispatch(operands.symbol, operands.left, operands.right);
    let outcome = Outcome { operands, result };
    writeln!(output, "{}", outcome.line())?;
    output.flush()?;

    match &outcome.result {
        Ok(value) => tracing::info!(value, "вычисление завершено"),
        Err(e) => tracing::info!(error = ?e, "вычисление не выполнено"),
    }
    Ok(outcome)
}

/// Запускает калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках чтения/записи.
pub fn run(progress: &ProgressConfig) -> Result<Outcome, CalcError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, progress)
}
