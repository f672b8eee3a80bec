//! Quiz service
//!
//! Asks the configured question and checks answers against the configured rule,
//! either interactively line by line or as a batch.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::Sentence;

/// Counts for one interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub answered: usize,
    pub correct: usize,
}

impl SessionSummary {
    fn record(&mut self, matched: bool) {
        self.answered += 1;
        if matched {
            self.correct += 1;
        }
    }
}

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub answer: String,
    pub matched: bool,
}

/// Service for checking answers against the configured rule.
pub struct QuizService {
    settings: Arc<Settings>,
}

impl QuizService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Check a single answer line.
    pub fn is_correct(&self, answer: &str) -> bool {
        let sentence = Sentence::new(answer);
        let matched = self.settings.rule.evaluate(&sentence);
        trace!(answer, tokens = sentence.len(), matched, "evaluated answer");
        matched
    }

    /// Run an interactive session.
    ///
    /// Writes the question once, then for every line: the prompt, then the
    /// correct or wrong message. Ends cleanly when `input` is exhausted; a
    /// final prompt is written before end of input is noticed. Lines are
    /// decoded lossily, so invalid UTF-8 still gets a verdict.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        output: &mut W,
    ) -> ApplicationResult<SessionSummary> {
        let settings = &self.settings;
        writeln!(output, "{}", settings.question).with_context("write question")?;

        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        loop {
            write!(output, "{}", settings.prompt).with_context("write prompt")?;
            output.flush().with_context("flush prompt")?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_context("read answer")?;
            if read == 0 {
                debug!(
                    answered = summary.answered,
                    correct = summary.correct,
                    "end of input"
                );
                return Ok(summary);
            }

            let line = String::from_utf8_lossy(&buf);
            let matched = self.is_correct(strip_line_ending(&line));
            let verdict = if matched {
                &settings.correct
            } else {
                &settings.wrong
            };
            writeln!(output, "{}", verdict).with_context("write verdict")?;
            summary.record(matched);
        }
    }

    /// Check many answers in parallel. Verdicts keep the input order.
    #[instrument(level = "debug", skip_all, fields(count = answers.len()))]
    pub fn check_all(&self, answers: &[String]) -> Vec<Verdict> {
        answers
            .par_iter()
            .map(|answer| Verdict {
                answer: answer.clone(),
                matched: self.is_correct(answer),
            })
            .collect()
    }

    /// Read answers from a file, one per line, decoding invalid UTF-8 lossily.
    #[instrument(level = "debug")]
    pub fn load_answers(path: &Path) -> ApplicationResult<Vec<String>> {
        let bytes = std::fs::read(path).with_path_context("read answers", path)?;
        let content = String::from_utf8_lossy(&bytes);
        let answers: Vec<String> = content.lines().map(str::to_owned).collect();
        debug!("load_answers: {} lines", answers.len());
        Ok(answers)
    }
}

/// Drop a trailing `\n` and then a trailing `\r`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
