// src/core/report.rs
//
// Serializable views of command results for JSON output.

use serde::Serialize;

use crate::algorithms::CommandResult;
use crate::core::operation_counter::OperationCounter;
use crate::core::ring_context::RingContext;
use crate::polynomial::polynomial::Polynomial;

#[derive(Debug, Clone, Serialize)]
pub struct TermReport {
    pub coefficient: String,
    pub exponents: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PolynomialReport {
    pub text: String,
    pub terms: Vec<TermReport>,
}

impl PolynomialReport {
    pub fn new(polynomial: &Polynomial) -> Self {
        let terms = polynomial
            .terms()
            .rev()
            .map(|(alpha, coefficient)| TermReport {
                coefficient: coefficient.to_string(),
                exponents: alpha.as_slice().to_vec(),
            })
            .collect();
        PolynomialReport { text: polynomial.to_string(), terms }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultReport {
    Basis { generators: Vec<PolynomialReport> },
    NormalForm { normal_form: PolynomialReport },
    ZeroFunction { is_zero_function: bool },
    NonZeroTuple { tuple: Vec<i64> },
    Smarandache { n: u64, value: u64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub ring: RingContext,
    pub result: ResultReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<OperationCounter>,
}

impl CommandReport {
    pub fn new(command: &str, ring: RingContext, result: &CommandResult, counter: &OperationCounter) -> Self {
        let result = match result {
            CommandResult::Basis(ideal) => ResultReport::Basis {
                generators: ideal.generators().iter().map(PolynomialReport::new).collect(),
            },
            CommandResult::NormalForm(h) => ResultReport::NormalForm { normal_form: PolynomialReport::new(h) },
            CommandResult::ZeroFunction(vanishes) => ResultReport::ZeroFunction { is_zero_function: *vanishes },
            CommandResult::NonZeroTuple(tuple) => ResultReport::NonZeroTuple { tuple: tuple.clone() },
            CommandResult::Smarandache { n, value } => ResultReport::Smarandache { n: *n, value: *value },
        };
        let operations = if counter.is_enabled() { Some(counter.clone()) } else { None };
        CommandReport { command: command.to_string(), ring, result, operations }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize report: {}", e))
    }
}

/// Plain-text rendering of a command result.
pub fn format_text(result: &CommandResult) -> String {
    match result {
        CommandResult::Basis(ideal) => ideal.to_string(),
        CommandResult::NormalForm(h) => h.to_string(),
        CommandResult::ZeroFunction(vanishes) => (if *vanishes { "1" } else { "0" }).to_string(),
        CommandResult::NonZeroTuple(tuple) => {
            tuple.iter().map(|v| v.to_string()).collect::<Vec<String>>().join(",")
        }
        CommandResult::Smarandache { value, .. } => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{execute, VanishingCommand};

    #[test]
    fn test_json_report() {
        let ring = RingContext::new(4, 1);
        let mut counter = OperationCounter::disabled();
        let result = execute(VanishingCommand::Direct, &ring, None, &mut counter).unwrap();
        let report = CommandReport::new("direct", ring, &result, &counter);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["command"], "direct");
        assert_eq!(json["ring"]["modulus"].as_u64(), Some(4));
        assert_eq!(json["result"]["kind"], "basis");
        assert_eq!(json["result"]["generators"].as_array().unwrap().len(), 2);
        assert!(json.get("operations").is_none());
    }

    #[test]
    fn test_text_format() {
        assert_eq!(format_text(&CommandResult::ZeroFunction(false)), "0");
        assert_eq!(format_text(&CommandResult::NonZeroTuple(vec![-1, -1])), "-1,-1");
        assert_eq!(format_text(&CommandResult::Smarandache { n: 8, value: 4 }), "4");
    }
}
