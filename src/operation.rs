//! Диспетчер арифметических операций над двумя операндами.
//!
//! Поддерживает бинарные `+`, `-`, `*`, `/` над `f64`. Любой другой символ
//! операции считается недопустимым.
//!
//! # Примеры
//!
//! ```
//! use calculadora_rs::operation::{dispatch, EvalError, Operator};
//!
//! assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
//! assert_eq!(dispatch('/', 7.0, 0.0), Err(EvalError::DivisionByZero));
//! assert_eq!(dispatch('x', 3.0, 2.0), Err(EvalError::InvalidOperator('x')));
//! ```

use std::fmt::Display;

use thiserror::Error;

/// Ошибки при вычислении операции.
///
/// Текст ошибки совпадает со строкой, которую видит пользователь.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("Error: División por cero")]
    DivisionByZero,
    /// Символ операции не входит в `+`, `-`, `*`, `/`.
    #[error("Operación no válida")]
    InvalidOperator(char),
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Деление.
    Div,
}

impl Operator {
    /// Сопоставляет символ с операцией.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Символ операции.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить операцию к операндам.
    ///
    /// Делитель сравнивается с нулём точно, без допуска: `1e-300` — это
    /// допустимый делитель, а `-0.0` — ноль.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivisionByZero`] при делении на ноль.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(EvalError::InvalidOperator(symbol))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Выбирает операцию по символу и вычисляет её.
///
/// # Ошибки
///
/// - [`EvalError::InvalidOperator`] для неизвестного символа.
/// - [`EvalError::DivisionByZero`] при делении на ноль.
pub fn dispatch(symbol: char, left: f64, right: f64) -> Result<f64, EvalError> {
    let op = Operator::try_from(symbol)?;
    let result = op.apply(left, right);
    tracing::debug!(%op, left, right, ?result, "операция вычислена");
    result
}

/// Строка результата с двумя знаками после запятой.
#[must_use]
pub fn format_result(value: f64) -> String {
    format!("Resultado: {value:.2}")
}

/// Итоговая строка для пользователя: результат либо текст ошибки.
#[must_use]
pub fn render(result: &Result<f64, EvalError>) -> String {
    match result {
        Ok(value) => format_result(*value),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! dispatch_tests {
        ($($name:ident: ($a:expr, $op:expr, $b:expr) => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    let line = render(&dispatch($op, $a, $b));
                    assert_eq!(line, $expected, "ввод: {} {} {}", $a, $op, $b);
                }
            )*
        };
    }

    dispatch_tests! {
        render_add: (10.0, '+', 5.0) => "Resultado: 15.00",
        render_sub: (2.5, '-', 4.0) => "Resultado: -1.50",
        render_mul: (1.5, '*', 3.0) => "Resultado: 4.50",
        render_div: (9.0, '/', 2.0) => "Resultado: 4.50",
        render_div_repeating: (1.0, '/', 3.0) => "Resultado: 0.33",
        render_div_rounds_up: (2.0, '/', 3.0) => "Resultado: 0.67",
        render_div_zero: (7.0, '/', 0.0) => "Error: División por cero",
        render_div_negative_zero: (7.0, '/', -0.0) => "Error: División por cero",
        render_zero_div_zero: (0.0, '/', 0.0) => "Error: División por cero",
        render_invalid_letter: (3.0, 'x', 2.0) => "Operación no válida",
        render_invalid_percent: (3.0, '%', 2.0) => "Operación no válida",
        render_invalid_nul: (3.0, '\0', 2.0) => "Operación no válida",
    }

    #[test]
    fn symbol_roundtrip() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('^'), None);
    }

    #[test]
    fn try_from_reports_symbol() {
        assert_eq!(Operator::try_from('/'), Ok(Operator::Div));
        assert_eq!(Operator::try_from('?'), Err(EvalError::InvalidOperator('?')));
    }

    #[test]
    fn tiny_divisor_is_not_zero() {
        // Точное сравнение: очень малый делитель допустим.
        assert_eq!(Operator::Div.apply(1e-300, 1e-300), Ok(1.0));
    }

    #[test]
    fn invalid_operator_wins_over_zero_divisor() {
        assert_eq!(dispatch('x', 1.0, 0.0), Err(EvalError::InvalidOperator('x')));
    }

    #[test]
    fn overflow_is_not_an_error() {
        let result = Operator::Mul.apply(f64::MAX, 2.0).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn error_messages() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "Error: División por cero");
        assert_eq!(EvalError::InvalidOperator('x').to_string(), "Operación no válida");
    }
}
