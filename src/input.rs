//! Сбор операндов и символа операции со стандартного ввода.
//!
//! Чтение устроено как форматированный сканер: токены могут разделяться
//! любыми пробелами и переводами строк, а число забирает самый длинный
//! префикс, похожий на десятичный литерал. Поэтому `10+5` на одной строке
//! читается как `10`, `+`, `5`.
//!
//! Проверки ввода нет: если число не найдено, получается `0.0`, а в конце
//! ввода вместо символа операции получается `'\0'`.
//!
//! # Пример
//!
//! ```
//! use calculadora_rs::input::Scanner;
//!
//! let mut scanner = Scanner::new("10+5".as_bytes());
//! assert_eq!(scanner.read_number().unwrap(), Some(10.0));
//! assert_eq!(scanner.read_symbol().unwrap(), Some('+'));
//! assert_eq!(scanner.read_number().unwrap(), Some(5.0));
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Приглашение для первого операнда.
pub const PROMPT_FIRST: &str = "Introduce el primer número: ";
/// Приглашение для символа операции.
pub const PROMPT_OPERATOR: &str = "Introduce la operación (+, -, *, /): ";
/// Приглашение для второго операнда.
pub const PROMPT_SECOND: &str = "Introduce el segundo número: ";

/// Ошибка чтения ввода.
///
/// Некорректный ввод ошибкой не считается; сюда попадают только сбои
/// ввода-вывода.
#[derive(Error, Debug)]
pub enum InputError {
    /// Ошибка ввода-вывода.
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),
}

/// Значения, прочитанные за один запуск.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    /// Первый операнд.
    pub left: f64,
    /// Символ операции (не проверяется).
    pub symbol: char,
    /// Второй операнд.
    pub right: f64,
}

/// Построчный сканер поверх [`BufRead`].
///
/// Строки читаются как байты; байты, не образующие UTF-8, заменяются на
/// `U+FFFD` и дальше ведут себя как любой другой нечисловой символ.
pub struct Scanner<R> {
    reader: R,
    raw: Vec<u8>,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Создаёт сканер поверх источника.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            line: String::new(),
            pos: 0,
        }
    }

    fn rest(&self) -> &str {
        &self.line[self.pos..]
    }

    /// Подгружает следующую строку, если текущая исчерпана.
    /// Возвращает `false` в конце ввода.
    fn fill(&mut self) -> io::Result<bool> {
        if self.pos < self.line.len() {
            return Ok(true);
        }
        self.raw.clear();
        self.pos = 0;
        let read = self.reader.read_until(b'\n', &mut self.raw)?;
        self.line = String::from_utf8_lossy(&self.raw).into_owned();
        Ok(read > 0)
    }

    /// Пропускает пробелы, в том числе через границы строк.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            if !self.fill()? {
                return Ok(false);
            }
            let skipped: usize = self
                .rest()
                .chars()
                .take_while(|c| c.is_whitespace())
                .map(char::len_utf8)
                .sum();
            self.pos += skipped;
            if self.pos < self.line.len() {
                return Ok(true);
            }
        }
    }

    /// Читает число.
    ///
    /// Возвращает `None`, если ввод закончился или в текущей позиции нет
    /// числового префикса. В последнем случае ничего не потребляется.
    ///
    /// # Ошибки
    ///
    /// [`InputError::Io`] при сбое чтения.
    pub fn read_number(&mut self) -> Result<Option<f64>, InputError> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let len = numeric_prefix_len(self.rest());
        if len == 0 {
            return Ok(None);
        }
        let value = self.rest()[..len].parse().ok();
        self.pos += len;
        Ok(value)
    }

    /// Читает один непробельный символ.
    ///
    /// # Ошибки
    ///
    /// [`InputError::Io`] при сбое чтения.
    pub fn read_symbol(&mut self) -> Result<Option<char>, InputError> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let ch = self.rest().chars().next();
        if let Some(c) = ch {
            self.pos += c.len_utf8();
        }
        Ok(ch)
    }
}

/// Длина самого длинного префикса вида `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// Хотя бы одна цифра в мантиссе обязательна; экспонента без цифр не
/// входит в префикс. `inf`, `nan` и шестнадцатеричные литералы (`0x10`)
/// числами не считаются: `0x10` читается как `0`, после которого идёт `x`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

fn prompt(output: &mut impl Write, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes())?;
    output.flush()
}

/// Запрашивает и читает первый операнд, символ операции и второй операнд.
///
/// Пропущенные значения заменяются на `0.0` и `'\0'` с предупреждением в
/// журнале.
///
/// # Ошибки
///
/// [`InputError::Io`] при сбоях чтения или записи приглашений.
pub fn collect<R: BufRead, W: Write>(
    scanner: &mut Scanner<R>,
    output: &mut W,
) -> Result<Operands, InputError> {
    prompt(output, PROMPT_FIRST)?;
    let left = number_or_default(scanner, "первый операнд")?;

    prompt(output, PROMPT_OPERATOR)?;
    let symbol = scanner.read_symbol()?.unwrap_or_else(|| {
        tracing::warn!("символ операции не прочитан, используется '\\0'");
        '\0'
    });

    prompt(output, PROMPT_SECOND)?;
    let right = number_or_default(scanner, "второй операнд")?;

    tracing::debug!(left, %symbol, right, "ввод прочитан");
    Ok(Operands {
        left,
        symbol,
        right,
    })
}

fn number_or_default<R: BufRead>(
    scanner: &mut Scanner<R>,
    what: &str,
) -> Result<f64, InputError> {
    Ok(scanner.read_number()?.unwrap_or_else(|| {
        tracing::warn!("{what} не прочитан, используется 0");
        0.0
    }))
}
