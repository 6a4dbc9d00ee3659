//! Prompt de terminal: una línea por campo. Línea vacía o EOF = cancelar.

use std::io::{self, BufRead, Stderr, StdinLock, Write};

use bridge_core::{Prompt, PromptRequest};
use log::warn;
use serde_json::Value;

pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<StdinLock<'static>, Stderr> {
    /// Lee de stdin y pregunta por stderr (stdout queda para el JSON).
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn prompt(&mut self, request: &PromptRequest) -> Option<Value> {
        let question = match &request.default_value {
            Some(d) => format!("{} [{}]: ", request.prompt_text, d),
            None => format!("{}: ", request.prompt_text),
        };
        if let Err(e) = self.output.write_all(question.as_bytes()).and_then(|_| self.output.flush()) {
            warn!("prompt:write field={} err={e}", request.field_name);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(Value::String(answer.to_string()))
                }
            }
            Err(e) => {
                warn!("prompt:read field={} err={e}", request.field_name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(default: Option<Value>) -> PromptRequest {
        PromptRequest { field_name: "file".into(), prompt_text: "Archivo".into(), default_value: default }
    }

    #[test]
    fn reads_one_trimmed_line_per_request() {
        let mut out = Vec::new();
        let mut p = TerminalPrompt::new("  data.json \n\n".as_bytes(), &mut out);
        assert_eq!(p.prompt(&request(None)), Some(json!("data.json")));
        assert_eq!(p.prompt(&request(Some(json!(3)))), None);
        assert_eq!(p.prompt(&request(None)), None);
        drop(p);
        assert_eq!(String::from_utf8(out).unwrap(), "Archivo: Archivo [3]: Archivo: ");
    }
}
