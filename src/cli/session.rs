//! Interactive symptom questionnaire.
//!
//! This is the presentation side of the tool: it walks the symptom registry in
//! display order, asks yes/no for each, and hands the collected set to the engine
//! once. The observed set lives in a `Session` owned by the caller; the engine
//! itself keeps no per-request state.
//!
//! Flow: start -> symptom entry -> result -> (restart | quit).

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use crate::domain::{Diagnosis, MessageLocale};
use crate::engine::DiagnosticEngine;
use crate::error::AppError;

/// Per-run answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected: BTreeSet<String>,
    result: Option<Diagnosis>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. A "no" removes a previous "yes".
    pub fn answer(&mut self, code: &str, present: bool) {
        if present {
            self.selected.insert(code.to_string());
        } else {
            self.selected.remove(code);
        }
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn result(&self) -> Option<&Diagnosis> {
        self.result.as_ref()
    }

    /// Run the engine over the current answers and keep the outcome.
    pub fn conclude(&mut self, engine: &DiagnosticEngine) -> &Diagnosis {
        self.result.insert(engine.diagnose(self.selected.iter().cloned()))
    }

    pub fn reset(&mut self) {
        self.selected.clear();
        self.result = None;
    }
}

enum Answer {
    Yes,
    No,
    Quit,
}

/// Run the questionnaire until the user quits or input ends.
///
/// Returns the outcome of every completed round.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &DiagnosticEngine,
    locale: MessageLocale,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<Diagnosis>, AppError> {
    let mut session = Session::new();
    let mut outcomes = Vec::new();

    say(output, "Sistem Pakar Diagnosa DBD")?;
    say(
        output,
        "Answer each question with y (ya) or n (tidak). Type q to quit.",
    )?;

    loop {
        session.reset();

        for symptom in engine.symptoms().all() {
            match ask(input, output, &format!("{symptom}? [y/n] "))? {
                Some(Answer::Yes) => session.answer(&symptom.code, true),
                Some(Answer::No) => session.answer(&symptom.code, false),
                Some(Answer::Quit) | None => return Ok(outcomes),
            }
        }

        let diagnosis = session.conclude(engine).clone();
        say(output, "")?;
        say(output, "=== Hasil Diagnosis ===")?;
        say(output, diagnosis.message(locale))?;
        outcomes.push(diagnosis);

        match ask(input, output, "Mulai ulang diagnosis? [y/n] ")? {
            Some(Answer::Yes) => continue,
            _ => return Ok(outcomes),
        }
    }
}

/// Prompt until a recognizable answer arrives. `None` means end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<Answer>, AppError> {
    loop {
        write!(output, "{prompt}")
            .and_then(|_| output.flush())
            .map_err(|e| AppError::config(format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::config(format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Ok(None);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "ya" | "yes" => return Ok(Some(Answer::Yes)),
            "n" | "t" | "tidak" | "no" => return Ok(Some(Answer::No)),
            "q" | "quit" => return Ok(Some(Answer::Quit)),
            other => say(output, &format!("Unrecognized answer: '{other}'. Use y or n."))?,
        }
    }
}

fn say<W: Write>(output: &mut W, line: &str) -> Result<(), AppError> {
    writeln!(output, "{line}").map_err(|e| AppError::config(format!("Failed to write output: {e}")))
}
