use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::PrecisionError;
use crate::validator::CaseBlock;


/// Demonstrator 的固定輸入。
///
/// `input` 同時無法以 binary64 精確表示、又落在 binary64 有效位數的邊緣。
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DemonstrationConfig {
    input: String,
    digits: i64,
    expected_rounded: String,
    incorrect_rounded: String
}

impl DemonstrationConfig {
    pub fn new(input: &str,
               digits: i64,
               expected_rounded: &str,
               incorrect_rounded: &str) -> DemonstrationConfig {
        DemonstrationConfig {
            input: input.to_owned(),
            digits,
            expected_rounded: expected_rounded.to_owned(),
            incorrect_rounded: incorrect_rounded.to_owned()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn digits(&self) -> i64 {
        self.digits
    }

    pub fn expected_rounded(&self) -> &str {
        &self.expected_rounded
    }

    pub fn incorrect_rounded(&self) -> &str {
        &self.incorrect_rounded
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ValidationConfig {
    digits: i64,
    blocks: Vec<CaseBlock>
}

impl ValidationConfig {
    pub fn new(digits: i64, blocks: Vec<CaseBlock>) -> ValidationConfig {
        ValidationConfig { digits, blocks }
    }

    pub fn digits(&self) -> i64 {
        self.digits
    }

    pub fn blocks(&self) -> &[CaseBlock] {
        &self.blocks
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
    demonstration: DemonstrationConfig,
    validation: ValidationConfig
}

impl Configuration {
    pub fn new(demonstration: DemonstrationConfig, validation: ValidationConfig) -> Configuration {
        Configuration { demonstration, validation }
    }

    /// 內建的輸入與期望值，與 `config/precision.json` 內容相同。
    pub fn standard() -> Configuration {
        let demonstration = DemonstrationConfig::new(
            "10000000000000.0544",
            2,
            "10000000000000.05",
            "10000000000000.06"
        );
        let blocks = vec![
            CaseBlock::unchanged("5.72", 41, 50),
            CaseBlock::rounded_to("5.72", 51, 59, "5.73"),
            CaseBlock::unchanged("5.73", 41, 49),
            CaseBlock::rounded_to("5.73", 50, 59, "5.74"),
            // 5.995 → "6.0"，而不是 "6.00"
            CaseBlock::rounded_to("5.99", 5, 5, "6.0"),
            // 整數部分用掉了幾乎所有有效位數
            CaseBlock::rounded_to("200000000000000.05", 44, 44, "2.0000000000000006E14")
        ];
        Configuration::new(demonstration, ValidationConfig::new(2, blocks))
    }

    pub fn demonstration(&self) -> &DemonstrationConfig {
        &self.demonstration
    }

    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, PrecisionError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, PrecisionError> {
        let configuration: Configuration = serde_json::from_str(json)?;
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_demonstration_values() {
        let configuration = Configuration::standard();
        let demonstration = configuration.demonstration();
        assert_eq!(demonstration.input(), "10000000000000.0544");
        assert_eq!(demonstration.digits(), 2);
        assert_eq!(demonstration.expected_rounded(), "10000000000000.05");
        assert_eq!(demonstration.incorrect_rounded(), "10000000000000.06");
        assert_eq!(configuration.validation().blocks().len(), 6);
    }

    #[test]
    fn from_json_str_reads_blocks() {
        let json = r#"{
            "demonstration": {
                "input": "1.005",
                "digits": 2,
                "expected_rounded": "1.00",
                "incorrect_rounded": "1.00"
            },
            "validation": {
                "digits": 2,
                "blocks": [
                    { "prefix": "1.00", "first_suffix": 41, "last_suffix": 49 },
                    { "prefix": "1.00", "first_suffix": 51, "last_suffix": 59, "expected": "1.01" }
                ]
            }
        }"#;
        let configuration = Configuration::from_json_str(json).unwrap();
        assert_eq!(configuration.demonstration().input(), "1.005");
        assert_eq!(configuration.validation().blocks()[0], CaseBlock::unchanged("1.00", 41, 49));
        assert_eq!(configuration.validation().blocks()[1], CaseBlock::rounded_to("1.00", 51, 59, "1.01"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = Configuration::from_json_str("{ \"demonstration\": 3 }").unwrap_err();
        assert!(matches!(error, PrecisionError::JsonParseError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = Configuration::from_reader("does/not/exist.json").unwrap_err();
        assert!(matches!(error, PrecisionError::IOError(_)));
    }
}
