// ─────────────────────────────────────────────────────────────────────────────
// Shortest round-trip text of a binary64 value
// ─────────────────────────────────────────────────────────────────────────────
//
// 有效位數取自標準函式庫的 shortest round-trip formatter（`{:e}`）：
// 能被 parse 回同一個 binary64 的最少位數，若有多個候選取最接近真值者。
//
// 版面（canonical double notation）：
//   1e-3 <= |x| < 1e7  →  位置記數法，至少一位小數      6.0、5.725、0.001
//   其他               →  d.ddd…E<exp>，至少一位小數     1.0E7、2.0000000000000006E14

use crate::error::PrecisionError;

const PLAIN_LOWER_BOUND: f64 = 1e-3;
const PLAIN_UPPER_BOUND: f64 = 1e7;

/// 最短十進位有效位數與十進位指數：x = d1.d2d3… × 10^exponent
struct ShortestDigits {
    digits: String,
    exponent: i32
}

impl ShortestDigits {
    fn of(magnitude: f64) -> Result<ShortestDigits, PrecisionError> {
        let scientific = format!("{:e}", magnitude);
        ShortestDigits::parse(&scientific)
    }

    /// 解析 `{:e}` 的輸出，例如 "1.0000000000000055e13"。
    fn parse(scientific: &str) -> Result<ShortestDigits, PrecisionError> {
        let (mantissa, exponent) = scientific
            .split_once('e')
            .ok_or_else(|| PrecisionError::invalid_input(scientific, "missing exponent"))?;
        let exponent = exponent
            .parse::<i32>()
            .map_err(|error| PrecisionError::invalid_input(scientific, &error.to_string()))?;
        Ok(ShortestDigits {
            digits: mantissa.chars().filter(|c| c.is_ascii_digit()).collect(),
            exponent
        })
    }

    fn plain(&self) -> String {
        if self.exponent < 0 {
            let leading_zeros = (-self.exponent - 1) as usize;
            return format!("0.{}{}", "0".repeat(leading_zeros), self.digits);
        }

        let integer_len = self.exponent as usize + 1;
        if self.digits.len() <= integer_len {
            format!("{}{}.0", self.digits, "0".repeat(integer_len - self.digits.len()))
        } else {
            let (integer_part, fraction_part) = self.digits.split_at(integer_len);
            format!("{}.{}", integer_part, fraction_part)
        }
    }

    fn scientific(&self) -> String {
        let (first, rest) = self.digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        format!("{}.{}E{}", first, rest, self.exponent)
    }
}

/// binary64 的 shortest round-trip 字串（見檔頭的版面規則）。
pub fn shortest_round_trip(x: f64) -> Result<String, PrecisionError> {
    if x.is_nan() {
        return Ok("NaN".to_owned());
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_infinite() {
        return Ok(format!("{}Infinity", sign));
    }
    if x == 0.0 {
        return Ok(format!("{}0.0", sign));
    }

    let magnitude = x.abs();
    let digits = ShortestDigits::of(magnitude)?;
    let body = if (PLAIN_LOWER_BOUND..PLAIN_UPPER_BOUND).contains(&magnitude) {
        digits.plain()
    } else {
        digits.scientific()
    };
    Ok(format!("{}{}", sign, body))
}

/// 同樣的最短有效位數，但以純位置記數法展開、不加指數（整數值不帶小數點）。
pub fn plain_text(x: f64) -> String {
    format!("{}", x)
}
