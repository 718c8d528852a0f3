//! Option grammar
//!
//! Turns the raw argument list into an [`Invocation`]:
//! - slash arguments become typed [`Token`]s, with compound forms such as
//!   `/D/M` split into `/D` and `/M`
//! - dash arguments set modifier [`Flags`]
//! - `d-m-y` style arguments set the `/T` field order
//! - a trailing `0` or `1` sets the output mode (last one wins)
//! - any other bare word names the variable for slash default mode

mod order;
mod token;

pub use order::{OrderField, OrderSpec};
pub use token::{Category, OptionTag, Token};

/// Literal help token, never treated as a slash option
pub const HELP_TOKEN: &str = "/?";

/// Whether computed values are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Print,
    Quiet,
}

/// Modifier flags; each is set when its literal appears anywhere
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub edit_hint: bool,
    pub edit_all: bool,
    pub full: bool,
    pub slash: bool,
    pub leap: bool,
    pub clear: bool,
    pub abbreviate: bool,
    pub two_digit: bool,
    pub season: bool,
    pub var: bool,
}

/// Everything one command line asks for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub tokens: Vec<Token>,
    pub flags: Flags,
    pub order: Option<OrderSpec>,
    pub var_name: Option<String>,
    pub output: OutputMode,
}

impl Invocation {
    /// Classify every argument (program name excluded)
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let mut invocation = Invocation::default();

        for arg in args {
            let arg = arg.as_ref();

            if arg == HELP_TOKEN {
                invocation.flags.help = true;
            } else if arg.starts_with('/') {
                split_option(arg, &mut invocation.tokens);
            } else if let Some(order) = OrderSpec::parse(arg) {
                invocation.order = Some(order);
            } else if arg == "0" {
                invocation.output = OutputMode::Quiet;
            } else if arg == "1" {
                invocation.output = OutputMode::Print;
            } else if arg.starts_with('-') {
                invocation.flags.set(arg);
            } else if !arg.is_empty() && !arg.bytes().all(|b| b.is_ascii_digit()) {
                invocation.var_name = Some(arg.to_string());
            }
        }

        log::debug!("parsed invocation: {:?}", invocation);
        invocation
    }

    pub fn prints(&self) -> bool {
        self.output == OutputMode::Print
    }
}

impl Flags {
    fn set(&mut self, arg: &str) {
        match arg {
            "-e" => self.edit_hint = true,
            "--edit-all" => self.edit_all = true,
            "--full" => self.full = true,
            "--slash" => self.slash = true,
            "--leap" => self.leap = true,
            "--clear-var" => self.clear = true,
            "-abbrv" => self.abbreviate = true,
            "-t" | "--two-digit" => self.two_digit = true,
            "--season" => self.season = true,
            "-v" => self.var = true,
            other => log::debug!("ignoring unrecognised flag {}", other),
        }
    }
}

/// Append the tokens of one slash argument.
///
/// An argument with another `/` after the leading one is split on `/`
/// and each non-empty piece is re-prefixed; otherwise it is one token.
pub fn split_option(arg: &str, out: &mut Vec<Token>) {
    let rest = arg.get(1..).unwrap_or("");
    if rest.contains('/') {
        out.extend(
            arg.split('/')
                .filter(|part| !part.is_empty())
                .map(|part| Token::classify(&format!("/{}", part))),
        );
    } else {
        out.push(Token::classify(arg));
    }
}
