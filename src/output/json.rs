use serde::Serialize;

use crate::error::Result;
use crate::message::Message;
use crate::profile::Severity;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    messages: Vec<JsonMessage<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    errors: usize,
    warnings: usize,
    infos: usize,
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    file: &'a str,
    severity: Severity,
    value: &'a str,
    message: &'a str,
    template: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    variable: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, messages: &[Message]) -> Result<String> {
        let (errors, warnings, infos) =
            messages
                .iter()
                .fold((0, 0, 0), |(e, w, i), m| match m.severity() {
                    Severity::Error => (e + 1, w, i),
                    Severity::Warn => (e, w + 1, i),
                    Severity::Info => (e, w, i + 1),
                });

        let output = JsonOutput {
            summary: Summary {
                total: messages.len(),
                errors,
                warnings,
                infos,
            },
            messages: messages.iter().map(convert_message).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_message(message: &Message) -> JsonMessage<'_> {
    JsonMessage {
        file: message.file(),
        severity: message.severity(),
        value: message.value(),
        message: message.text(),
        template: message.template(),
        variable: message.variable(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
