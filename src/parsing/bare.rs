use super::InputParser;
use crate::definitions::InputDefinition;
use crate::engine::{
    Capture, CompiledGrammar, GrammarLimits, MatchedToken, ParseDetails, ParseTimings, Rejection, assemble,
    match_sequence,
};
use crate::error::ConfigError;
use crate::sequence::InputSequence;
use std::fmt;
use std::time::Instant;

/// Context-free parser over a unified grammar of input definitions.
///
/// Each token is parsed in isolation; nothing here compares inputs with each
/// other. Wrap it in a [`ContextualParser`](super::ContextualParser) for that.
pub struct BareParser {
    definitions: Vec<Box<dyn InputDefinition>>,
    grammar: CompiledGrammar,
}

impl BareParser {
    /// Compile `definitions` into one grammar. Registration order decides
    /// which definition wins when several match the same text.
    pub fn new(definitions: Vec<Box<dyn InputDefinition>>, limits: GrammarLimits) -> Result<Self, ConfigError> {
        let grammar = CompiledGrammar::new(&definitions, limits)?;
        Ok(BareParser { definitions, grammar })
    }

    pub fn limits(&self) -> &GrammarLimits {
        &self.grammar.limits
    }

    pub fn definitions(&self) -> &[Box<dyn InputDefinition>] {
        &self.definitions
    }

    fn run(&self, text: &str) -> Result<InputSequence, Rejection> {
        let captures = match_sequence(&self.grammar, text).ok_or(Rejection::NoMatch)?;
        assemble(text, &captures, &self.definitions, &self.grammar.limits)
    }

    /// Parse `text` and report what the matcher saw along the way.
    pub fn parse_verbose(&self, text: &str) -> ParseDetails {
        let start = Instant::now();
        let captures = match_sequence(&self.grammar, text);
        let matching = start.elapsed();

        let assembly_start = Instant::now();
        let outcome = match &captures {
            Some(captures) => assemble(text, captures, &self.definitions, &self.grammar.limits),
            None => Err(Rejection::NoMatch),
        };
        let assembly = assembly_start.elapsed();

        let mut details = ParseDetails {
            text: text.to_string(),
            result: None,
            rejection: None,
            tokens: Vec::new(),
            sets: Vec::new(),
            holds: Vec::new(),
            repeats: Vec::new(),
            timings: ParseTimings { matching, assembly, total: start.elapsed() },
        };
        for capture in captures.iter().flatten() {
            match *capture {
                Capture::Token { alt, slot, start, end } => details.tokens.push(MatchedToken {
                    definition: self.grammar.alternatives[alt].label.clone(),
                    slot,
                    start,
                    end,
                    text: text[start..end].to_string(),
                }),
                Capture::Hold { offset } => details.holds.push(offset),
                Capture::Repeat { offset, count } => details.repeats.push((offset, count)),
                Capture::Set { start, end } => details.sets.push((start, end)),
            }
        }
        match outcome {
            Ok(sequence) => details.result = Some(sequence),
            Err(rejection) => details.rejection = Some(rejection),
        }
        details
    }
}

impl InputParser for BareParser {
    fn parse(&self, text: &str) -> Option<InputSequence> {
        match self.run(text) {
            Ok(sequence) => Some(sequence),
            Err(rejection) => {
                log::debug!("rejected {text:?}: {rejection}");
                None
            }
        }
    }
}

impl fmt::Debug for BareParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BareParser")
            .field("definitions", &self.definitions.len())
            .field("limits", &self.grammar.limits)
            .finish()
    }
}
