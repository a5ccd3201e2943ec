use std::ops::RangeInclusive;

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::error::PrecisionError;
use super::exactdecimal::{
    from_binary,
    from_text,
    round_half_even,
    to_binary
};
use super::shortesttext::shortest_round_trip;

// ─────────────────────────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────────────────────────

/// 同一個數值經過各條轉換路徑後的全部表示法。
///
/// - `correct`：對 literal 的精確值做 half-even（正確答案）
/// - `correct_of_binary`：對 binary64 真值做 half-even
/// - `naive`：對 shortest round-trip 字串做 half-even（有缺陷的作法）
///
/// 建立後不再變動。
#[derive(Clone, Debug)]
pub struct Evaluation {
    literal: String,
    digits: i64,
    binary: f64,
    decimal_of_literal: BigDecimal,
    decimal_of_binary: BigDecimal,
    shortest_text: String,
    decimal_of_shortest_text: BigDecimal,
    correct: BigDecimal,
    correct_of_binary: BigDecimal,
    naive: BigDecimal,
    naive_binary: f64,
    naive_shortest_text: String
}

impl Evaluation {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn digits(&self) -> i64 {
        self.digits
    }

    pub fn binary(&self) -> f64 {
        self.binary
    }

    pub fn decimal_of_literal(&self) -> &BigDecimal {
        &self.decimal_of_literal
    }

    pub fn decimal_of_binary(&self) -> &BigDecimal {
        &self.decimal_of_binary
    }

    pub fn shortest_text(&self) -> &str {
        &self.shortest_text
    }

    pub fn decimal_of_shortest_text(&self) -> &BigDecimal {
        &self.decimal_of_shortest_text
    }

    pub fn correct(&self) -> &BigDecimal {
        &self.correct
    }

    pub fn correct_of_binary(&self) -> &BigDecimal {
        &self.correct_of_binary
    }

    pub fn naive(&self) -> &BigDecimal {
        &self.naive
    }

    /// naive 結果轉回 binary64，即有缺陷的 routine 回傳給呼叫端的值。
    pub fn naive_binary(&self) -> f64 {
        self.naive_binary
    }

    pub fn naive_shortest_text(&self) -> &str {
        &self.naive_shortest_text
    }

    pub fn is_divergent(&self) -> bool {
        self.naive != self.correct
    }

    pub fn binary_differs_from_literal(&self) -> bool {
        self.decimal_of_binary != self.decimal_of_literal
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline
// ─────────────────────────────────────────────────────────────────────────────

fn check_digits(digits: i64) -> Result<(), PrecisionError> {
    if digits < 0 {
        Err(PrecisionError::negative_digits(digits))
    } else {
        Ok(())
    }
}

/// 十進位 literal → 最接近的 binary64。
pub fn parse_binary(literal: &str) -> Result<f64, PrecisionError> {
    from_text(literal)?;
    let binary = literal
        .parse::<f64>()
        .map_err(|error| PrecisionError::invalid_input(literal, &error.to_string()))?;
    if binary.is_finite() {
        Ok(binary)
    } else {
        Err(PrecisionError::invalid_input(literal, "out of binary64 range"))
    }
}

/// 捨入後的十進位值轉回 binary64；結果為 0 時沿用原值的正負號。
fn back_to_binary(rounded: &BigDecimal, original: f64) -> Result<f64, PrecisionError> {
    let result = to_binary(rounded)?;
    if result == 0.0 {
        Ok(0.0 * original)
    } else {
        Ok(result)
    }
}

/// 對一個十進位 literal 跑完整的比較流程。
pub fn evaluate(literal: &str, digits: i64) -> Result<Evaluation, PrecisionError> {
    check_digits(digits)?;

    let decimal_of_literal = from_text(literal)?;
    let binary = parse_binary(literal)?;
    let decimal_of_binary = from_binary(binary)?;
    let shortest_text = shortest_round_trip(binary)?;
    let decimal_of_shortest_text = from_text(&shortest_text)?;
    debug!(literal, binary, shortest_text = shortest_text.as_str(), "converted literal");

    let correct = round_half_even(&decimal_of_literal, digits)?;
    let correct_of_binary = round_half_even(&decimal_of_binary, digits)?;
    let naive = round_half_even(&decimal_of_shortest_text, digits)?;
    let naive_binary = back_to_binary(&naive, binary)?;
    let naive_shortest_text = shortest_round_trip(naive_binary)?;
    debug!(literal, digits, %correct, %naive, "rounded half-even");

    Ok(Evaluation {
        literal: literal.to_owned(),
        digits,
        binary,
        decimal_of_literal,
        decimal_of_binary,
        shortest_text,
        decimal_of_shortest_text,
        correct,
        correct_of_binary,
        naive,
        naive_binary,
        naive_shortest_text
    })
}

/// 有缺陷的 routine 本身：binary64 → shortest 字串 → 十進位 → half-even → binary64。
///
/// 無窮大原樣回傳，NaN 回傳 NaN。
pub fn naive_round(x: f64, digits: i64) -> Result<f64, PrecisionError> {
    check_digits(digits)?;
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if x.is_infinite() {
        return Ok(x);
    }

    let text = shortest_round_trip(x)?;
    let rounded = round_half_even(&from_text(&text)?, digits)?;
    back_to_binary(&rounded, x)
}

/// 對 prefix + suffix 產生的每個 literal 做 `evaluate`，回傳 naive 與正確結果不一致者。
pub fn scan(prefix: &str,
            suffixes: RangeInclusive<u32>,
            digits: i64) -> Result<Vec<Evaluation>, PrecisionError> {
    let mut divergent = Vec::new();
    for suffix in suffixes {
        let evaluation = evaluate(&format!("{}{}", prefix, suffix), digits)?;
        if evaluation.is_divergent() {
            divergent.push(evaluation);
        }
    }
    Ok(divergent)
}
