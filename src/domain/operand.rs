//! 숫자 인자 해석/연산 규칙.
//! 두 피연산자가 모두 정수면 정수로, 하나라도 소수면 소수로 계산한다.

use std::fmt;

use crate::domain::command::CommandError;

const NOT_A_NUMBER: &str = "Both inputs must be numbers.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Integer(i64),
    Decimal(f64),
}

impl Operand {
    /// 토큰 하나를 숫자로 해석한다.
    /// 정수 형태(부호 + 숫자)는 항상 정수로 다루며, `i64` 범위를 넘으면 계산 오류다.
    /// `inf`/`NaN` 같은 비유한 값은 숫자가 아니다.
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        if is_integer_shaped(token) {
            return token
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| CommandError::runtime(format!("integer out of range: {token}")));
        }
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Self::Decimal(v)),
            _ => Err(CommandError::argument(NOT_A_NUMBER)),
        }
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, CommandError> {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, CommandError> {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }

    fn combine(
        self,
        rhs: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        dec_op: fn(f64, f64) -> f64,
    ) -> Result<Self, CommandError> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => int_op(a, b)
                .map(Self::Integer)
                .ok_or_else(|| CommandError::runtime("integer overflow")),
            (a, b) => {
                let value = dec_op(a.as_f64(), b.as_f64());
                if value.is_finite() {
                    Ok(Self::Decimal(value))
                } else {
                    Err(CommandError::runtime("result is out of range"))
                }
            }
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Decimal(v) => v,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            // 소수는 지수 표기 없이, 정수값이어도 `4.0`처럼 소수점을 남긴다.
            Self::Decimal(v) => {
                let text = v.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
        }
    }
}

fn is_integer_shaped(token: &str) -> bool {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// 정확히 두 개의 숫자 인자를 요구하는 명령의 인자 검증.
pub fn parse_pair(command: &str, args: &[&str]) -> Result<(Operand, Operand), CommandError> {
    let [a, b] = args else {
        return Err(CommandError::argument(format!(
            "usage: {command} <a> <b> (expected 2 arguments, got {})",
            args.len()
        )));
    };

    Ok((Operand::parse(a)?, Operand::parse(b)?))
}
