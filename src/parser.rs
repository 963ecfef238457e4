//! The parser engine: a single forward pass over the argument vector.
//!
//! `argv[0]` is the program name. Every later token is either positional
//! (collected in order), a flag (`-name`, `--name`, `-name=value`,
//! `-name value`), or the terminator `-`/`--` after which everything is
//! positional. A failed flag stops the parse with one [`Diagnostic`].
//!
//! The entry points that exit the process ([`Registry::parse`],
//! [`Registry::parse_with`], [`Registry::parse_env`]) wrap the `try_*`
//! variants, which return a [`ParseError`] instead.

use tracing::{debug, trace};

use crate::arg_utils::{program_name, split_value, strip_prefix, BareToken};
use crate::config::HELP_FLAG;
use crate::diagnostics::{error_out, Diagnostic, ParseError, ParseOutcome};
use crate::option::{ArgError, Flag};
use crate::registry::{HelpRenderer, Registry};
use crate::similarity::best_match;

/// What processing one flag token did.
#[derive(Debug)]
struct Step<'t> {
    outcome: ParseOutcome,
    /// Name to report on failure.
    flag: &'t str,
    value: Option<&'t str>,
    error: Option<ArgError>,
    /// Index of the next unread token.
    next: usize,
}

/// Splits `name` into one slice per codepoint.
fn codepoints(name: &str) -> Vec<&str> {
    name.char_indices()
        .map(|(pos, c)| &name[pos..pos + c.len_utf8()])
        .collect()
}

impl<'a> Registry<'a> {
    /// Parses `argv`, returning the positional arguments.
    ///
    /// Prints a diagnostic and exits with status 1 on a bad flag, and exits
    /// with status 0 after running the help renderer.
    pub fn parse<S: AsRef<str>>(&mut self, argv: &[S]) -> Vec<String> {
        match self.try_parse(argv) {
            Ok(args) => args,
            Err(err) => error_out(&err),
        }
    }

    /// Like [`parse`](Self::parse) but hands each positional argument to `collect`.
    pub fn parse_with<S, F>(&mut self, argv: &[S], collect: F)
    where
        S: AsRef<str>,
        F: FnMut(&str),
    {
        if let Err(err) = self.try_parse_with(argv, collect) {
            error_out(&err);
        }
    }

    /// Parses the arguments of the running process.
    pub fn parse_env(&mut self) -> Vec<String> {
        let argv: Vec<String> = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.parse(&argv)
    }

    /// Parses `argv` without exiting on failure.
    pub fn try_parse<S: AsRef<str>>(&mut self, argv: &[S]) -> Result<Vec<String>, ParseError> {
        let mut args = Vec::new();
        self.try_parse_with(argv, |arg| args.push(arg.to_owned()))?;
        Ok(args)
    }

    /// Parses `argv` without exiting, handing positionals to `collect`.
    ///
    /// Positionals seen before a failing flag have already been collected when
    /// the error is returned.
    pub fn try_parse_with<S, F>(&mut self, argv: &[S], mut collect: F) -> Result<(), ParseError>
    where
        S: AsRef<str>,
        F: FnMut(&str),
    {
        let program = argv.first().map_or("", |arg0| program_name(arg0.as_ref()));
        debug!(program, tokens = argv.len(), "parsing arguments");

        let mut i = 1usize;
        while i < argv.len() {
            let arg = argv[i].as_ref();

            let Some(bare) = strip_prefix(arg) else {
                collect(arg);
                i += 1;
                continue;
            };

            // `-` or `--`: the rest is positional.
            if bare.text.is_empty() {
                trace!(index = i, "positional terminator");
                i += 1;
                break;
            }

            if bare.text == HELP_FLAG && self.help.is_some() {
                self.run_help(program);
                return Err(ParseError::Help);
            }

            let (name, inline) = split_value(bare.text);
            let mut step = self.process_flag(name, inline, argv, i);
            if step.outcome != ParseOutcome::Ok
                && self.settings.allow_grouping
                && self.is_group(name)
            {
                trace!(group = name, "retrying as grouped flags");
                step = self.process_group(name, inline, argv, i);
            }
            if step.outcome != ParseOutcome::Ok {
                return Err(self.complain(program, step, bare));
            }
            i = step.next;
        }

        for arg in argv.iter().skip(i) {
            collect(arg.as_ref());
        }
        debug!(program, "parse finished");
        Ok(())
    }

    /// Resolves `name` and applies its value, consuming `argv[i + 1]` when the
    /// flag takes a value and none was given inline.
    fn process_flag<'t, S: AsRef<str>>(
        &mut self,
        name: &'t str,
        inline: Option<&'t str>,
        argv: &'t [S],
        i: usize,
    ) -> Step<'t> {
        let mut step = Step {
            outcome: ParseOutcome::Ok,
            flag: name,
            value: inline,
            error: None,
            next: i + 1,
        };

        let Some(index) = self.resolve(name) else {
            step.outcome = ParseOutcome::InvalidOption;
            return step;
        };
        let mode = self.number_mode();
        let flag = &mut self.flags[index];
        trace!(token = name, flag = flag.name(), "resolved flag");

        if flag.takes_value() {
            let value = match inline {
                Some(value) => value,
                None => match argv.get(i + 1) {
                    Some(next) => {
                        step.next = i + 2;
                        next.as_ref()
                    }
                    None => {
                        step.outcome = ParseOutcome::MissingValue;
                        return step;
                    }
                },
            };
            step.value = Some(value);
            if let Err(err) = flag.parse_arg(Some(value), mode) {
                step.outcome = ParseOutcome::InvalidValue;
                step.error = Some(err);
            }
        } else if inline.is_some() {
            step.outcome = ParseOutcome::UnexpectedValue;
        } else if let Err(err) = flag.parse_arg(None, mode) {
            step.outcome = ParseOutcome::InvalidValue;
            step.error = Some(err);
        }
        step
    }

    /// `-abc` is a group when `a` and `b` are value-less flags and `c` is any flag.
    fn is_group(&self, name: &str) -> bool {
        let parts = codepoints(name);
        let Some((last, head)) = parts.split_last() else {
            return false;
        };
        !head.is_empty()
            && head.iter().all(|part| {
                self.resolve(part)
                    .is_some_and(|index| !self.flags[index].takes_value())
            })
            && self.resolve(last).is_some()
    }

    /// Applies every flag of a group in order; the last one gets the value.
    ///
    /// Results of the leading flags are not inspected: [`is_group`] already
    /// established they resolve and take no value.
    ///
    /// [`is_group`]: Self::is_group
    fn process_group<'t, S: AsRef<str>>(
        &mut self,
        name: &'t str,
        inline: Option<&'t str>,
        argv: &'t [S],
        i: usize,
    ) -> Step<'t> {
        let parts = codepoints(name);
        let mode = self.number_mode();
        let Some((&last, head)) = parts.split_last() else {
            return self.process_flag(name, inline, argv, i);
        };
        for part in head {
            if let Some(index) = self.resolve(part) {
                trace!(flag = *part, "grouped flag");
                let _ = self.flags[index].parse_arg(None, mode);
            }
        }
        self.process_flag(last, inline, argv, i)
    }

    fn run_help(&self, program: &str) {
        debug!(program, "help requested");
        match &self.help {
            Some(HelpRenderer::Custom(render)) => render(program),
            Some(HelpRenderer::Default) => print!("{}", self.render_help(program)),
            None => {}
        }
    }

    /// Builds the diagnostic for a failed step and consumes the one-shot description.
    fn complain(&mut self, program: &str, step: Step<'_>, bare: BareToken<'_>) -> ParseError {
        debug!(
            outcome = ?step.outcome,
            flag = step.flag,
            double_dash = bare.double_dash,
            "flag rejected"
        );

        let suggestion = match step.outcome {
            ParseOutcome::InvalidOption => {
                best_match(step.flag, self.flags.iter().map(Flag::name)).map(str::to_owned)
            }
            _ => None,
        };

        let (cause, detail) = match step.error {
            Some(ArgError::Convert(err)) => {
                let detail = err.to_string();
                (Some(err), Some(detail))
            }
            Some(ArgError::Rejected(rejection)) => {
                (None, rejection.description().map(str::to_owned))
            }
            None => (None, None),
        };
        let one_shot = self.description.take();

        ParseError::Invalid(Box::new(Diagnostic {
            program: program.to_owned(),
            outcome: step.outcome,
            flag: step.flag.to_owned(),
            value: step.value.map(str::to_owned),
            double_dash: bare.double_dash,
            suggestion,
            cause,
            description: detail.or(one_shot),
            help_hint: self.help.is_some(),
        }))
    }
}
