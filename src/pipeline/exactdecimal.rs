use std::str::FromStr;

use bigdecimal::{
    BigDecimal,
    RoundingMode
};

use crate::error::PrecisionError;

// ─────────────────────────────────────────────────────────────────────────────
// 精確十進位值：全部委託 bigdecimal，這裡只把錯誤轉成 PrecisionError
// ─────────────────────────────────────────────────────────────────────────────

/// 由十進位字串無損建構。`NaN`、`inf` 等非十進位寫法一律拒絕。
pub fn from_text(literal: &str) -> Result<BigDecimal, PrecisionError> {
    BigDecimal::from_str(literal)
        .map_err(|error| PrecisionError::invalid_input(literal, &error.to_string()))
}

/// 由 binary64 的「真值」建構，不經過任何字串轉換。
///
/// 每個有限的 binary64 都是 m·2^e，十進位展開一定有限；
/// 一般數值的結果取最短的精確 scale（0.0546875 而非 0.054687500）。
pub fn from_binary(value: f64) -> Result<BigDecimal, PrecisionError> {
    BigDecimal::try_from(value)
        .map_err(|error| PrecisionError::invalid_input(&value.to_string(), &error.to_string()))
}

/// 以 half-even 規則把精確值捨入到 `digits` 位小數，結果的 scale 恰為 `digits`。
///
/// 捨去的部分剛好是半個單位時取偶數尾數，否則取最近值（含進位）。
pub fn round_half_even(value: &BigDecimal, digits: i64) -> Result<BigDecimal, PrecisionError> {
    if digits < 0 {
        return Err(PrecisionError::negative_digits(digits));
    }
    let (_, scale) = value.as_bigint_and_exponent();
    if digits.checked_sub(scale).is_none() {
        return Err(PrecisionError::scale_out_of_range(digits, scale));
    }
    Ok(value.with_scale_round(digits, RoundingMode::HalfEven))
}

/// 以位置記數法輸出精確值，保留 scale 的全部位數，從不使用科學記號。
pub fn to_plain_string(value: &BigDecimal) -> String {
    value.to_plain_string()
}

/// 轉回最接近的 binary64（IEEE 754 nearest）。
pub fn to_binary(value: &BigDecimal) -> Result<f64, PrecisionError> {
    let text = to_plain_string(value);
    text.parse::<f64>()
        .map_err(|error| PrecisionError::invalid_input(&text, &error.to_string()))
}
