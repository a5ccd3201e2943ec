use serde::Deserialize;
use tracing::{
    debug,
    warn
};

use crate::configuration::ValidationConfig;
use crate::error::PrecisionError;
use crate::pipeline::exactdecimal::{
    from_binary,
    to_plain_string
};
use crate::pipeline::roundingpipeline::{
    naive_round,
    parse_binary
};
use crate::pipeline::shortesttext::shortest_round_trip;

// ─────────────────────────────────────────────────────────────────────────────
// CaseBlock / ValidationCase
// ─────────────────────────────────────────────────────────────────────────────

/// 一組測試 literal：`prefix` 後面接上 `first_suffix..=last_suffix` 的每個數字。
///
/// 例如 prefix "5.72"、suffix 41..=50 產生 "5.7241" 到 "5.7250"。
/// `expected` 省略時表示 naive 結果應與 prefix 相同。
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CaseBlock {
    prefix: String,
    first_suffix: u32,
    last_suffix: u32,
    #[serde(default)]
    expected: Option<String>
}

impl CaseBlock {
    pub fn unchanged(prefix: &str, first_suffix: u32, last_suffix: u32) -> CaseBlock {
        CaseBlock {
            prefix: prefix.to_owned(),
            first_suffix,
            last_suffix,
            expected: None
        }
    }

    pub fn rounded_to(prefix: &str, first_suffix: u32, last_suffix: u32, expected: &str) -> CaseBlock {
        CaseBlock {
            prefix: prefix.to_owned(),
            first_suffix,
            last_suffix,
            expected: Some(expected.to_owned())
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn expected(&self) -> &str {
        self.expected.as_deref().unwrap_or(&self.prefix)
    }

    pub fn cases(&self) -> Vec<ValidationCase> {
        (self.first_suffix..=self.last_suffix)
            .map(|suffix| ValidationCase::new(&format!("{}{}", self.prefix, suffix), self.expected()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationCase {
    literal: String,
    expected: String
}

impl ValidationCase {
    pub fn new(literal: &str, expected: &str) -> ValidationCase {
        ValidationCase {
            literal: literal.to_owned(),
            expected: expected.to_owned()
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

/// 一個通過比對的 case 的結果。
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    literal: String,
    binary: f64,
    rounded: f64,
    actual: String
}

impl CaseOutcome {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn binary(&self) -> f64 {
        self.binary
    }

    pub fn rounded(&self) -> f64 {
        self.rounded
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 比對
// ─────────────────────────────────────────────────────────────────────────────

/// 不一致時印到 stdout 的診斷列：原始 literal、parse 出的 binary64、
/// 捨入後 binary64 的 shortest 字串與其精確值。
pub fn mismatch_diagnostic(literal: &str,
                           binary_text: &str,
                           actual: &str,
                           rounded_text: &str) -> String {
    format!("Precision : {} ({})       -> : {} ({})", literal, binary_text, actual, rounded_text)
}

/// 只跑 naive 那一半：binary64 → shortest 字串 → half-even → binary64 → shortest 字串，
/// 再與期望字串做完全相同的字串比對（不用數值容差）。
///
/// 不一致時先把完整的中間值印到 stdout，再回傳 `AssertionMismatch`。
pub fn check_case(case: &ValidationCase, digits: i64) -> Result<CaseOutcome, PrecisionError> {
    let binary = parse_binary(case.literal())?;
    let rounded = naive_round(binary, digits)?;
    let actual = shortest_round_trip(rounded)?;
    debug!(literal = case.literal(), actual = actual.as_str(), "checked case");

    if actual != case.expected() {
        let binary_text = shortest_round_trip(binary)?;
        let rounded_text = to_plain_string(&from_binary(rounded)?);
        println!("{}", mismatch_diagnostic(case.literal(), &binary_text, &actual, &rounded_text));
        warn!(literal = case.literal(), expected = case.expected(), actual = actual.as_str(), "naive rounding mismatch");
        return Err(PrecisionError::AssertionMismatch {
            literal: case.literal().to_owned(),
            expected: case.expected().to_owned(),
            actual,
            binary: binary_text,
            rounded: rounded_text
        });
    }

    Ok(CaseOutcome {
        literal: case.literal().to_owned(),
        binary,
        rounded,
        actual
    })
}

/// 每個 case 各自獨立檢查，全部結果依序回傳。
pub fn run_table(validation: &ValidationConfig) -> Vec<Result<CaseOutcome, PrecisionError>> {
    validation
        .blocks()
        .iter()
        .flat_map(|block| block.cases())
        .map(|case| check_case(&case, validation.digits()))
        .collect()
}
