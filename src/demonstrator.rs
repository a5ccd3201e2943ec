use std::fmt;

use tracing::info;

use crate::configuration::DemonstrationConfig;
use crate::error::PrecisionError;
use crate::pipeline::exactdecimal::{
    from_binary,
    to_plain_string
};
use crate::pipeline::roundingpipeline::{
    evaluate,
    Evaluation
};
use crate::pipeline::shortesttext::plain_text;

const LABEL_WIDTH: usize = 42;
const MIN_LEADER_WIDTH: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// 排版
// ─────────────────────────────────────────────────────────────────────────────

/// " . . ." 引導點，寬度為奇數時先補一個空白。
fn dot_leader(width: usize) -> String {
    let width = width.max(MIN_LEADER_WIDTH);
    let mut leader = String::with_capacity(width);
    if width % 2 == 1 {
        leader.push(' ');
    }
    for _ in 0..width / 2 {
        leader.push_str(" .");
    }
    leader
}

/// 報表的一列：標籤、值，以及選擇性的捨入結果欄。
#[derive(Clone, Debug, PartialEq)]
pub struct ReportLine {
    label: String,
    value: String,
    rounded: Option<String>
}

impl ReportLine {
    fn new(label: &str, value: String) -> ReportLine {
        ReportLine { label: label.to_owned(), value, rounded: None }
    }

    fn with_rounded(label: &str, value: String, rounded: String) -> ReportLine {
        ReportLine { label: label.to_owned(), value, rounded: Some(rounded) }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rounded(&self) -> Option<&str> {
        self.rounded.as_deref()
    }
}

/// Demonstrator 的輸出。空白列以 `None` 表示。
pub struct Report {
    lines: Vec<Option<ReportLine>>
}

impl Report {
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.lines.iter().flatten()
    }

    fn value_width(&self) -> usize {
        self.lines()
            .filter(|line| line.rounded.is_some())
            .map(|line| line.value.len())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value_width = self.value_width();
        for line in self.lines.iter() {
            let Some(line) = line else {
                writeln!(f)?;
                continue;
            };
            write!(f, "{}{} : {}", line.label, dot_leader(LABEL_WIDTH - line.label.len().min(LABEL_WIDTH)), line.value)?;
            if let Some(rounded) = &line.rounded {
                let padding = value_width - line.value.len() + MIN_LEADER_WIDTH;
                write!(f, "{} : {}", dot_leader(padding), rounded)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Demonstrator
// ─────────────────────────────────────────────────────────────────────────────

/// 對固定輸入跑一次 `evaluate`，把每個中間值並排列出，只供人工比對。
pub struct Demonstrator {
    config: DemonstrationConfig
}

impl Demonstrator {
    pub fn new(config: DemonstrationConfig) -> Demonstrator {
        Demonstrator { config }
    }

    pub fn evaluate(&self) -> Result<Evaluation, PrecisionError> {
        evaluate(self.config.input(), self.config.digits())
    }

    pub fn report(&self) -> Result<Report, PrecisionError> {
        let evaluation = self.evaluate()?;
        info!(input = self.config.input(),
              divergent = evaluation.is_divergent(),
              "evaluated demonstration input");

        let naive_binary = evaluation.naive_binary();
        let lines = vec![
            Some(ReportLine::with_rounded(
                "Input",
                self.config.input().to_owned(),
                format!("{}  (expected, naive gives {})",
                        self.config.expected_rounded(),
                        self.config.incorrect_rounded()))),
            Some(ReportLine::with_rounded(
                "Exact decimal of input",
                to_plain_string(evaluation.decimal_of_literal()),
                to_plain_string(evaluation.correct()))),
            Some(ReportLine::with_rounded(
                "Exact decimal of binary",
                to_plain_string(evaluation.decimal_of_binary()),
                to_plain_string(evaluation.correct_of_binary()))),
            Some(ReportLine::with_rounded(
                "Exact decimal of shortest text",
                to_plain_string(evaluation.decimal_of_shortest_text()),
                format!("{}  (what naive rounding uses)", to_plain_string(evaluation.naive())))),
            Some(ReportLine::new("Binary plain text", plain_text(evaluation.binary()))),
            Some(ReportLine::new("Binary shortest text", evaluation.shortest_text().to_owned())),
            None,
            Some(ReportLine::new("Exact decimal of naive-rounded binary", to_plain_string(&from_binary(naive_binary)?))),
            Some(ReportLine::new("Naive-rounded binary plain text", plain_text(naive_binary))),
            Some(ReportLine::new("Naive-rounded binary shortest text", evaluation.naive_shortest_text().to_owned()))
        ];
        Ok(Report { lines })
    }
}
