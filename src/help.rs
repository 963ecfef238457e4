//! Default help text.
//!
//! ```text
//! Usage: prog ...
//!     -n, -num int
//!         # of iterations
//!     -l
//!         Long listing
//! ```

use std::fmt::Write;

use crate::config::OPTION_PREFIX;
use crate::option::Flag;
use crate::registry::Registry;

/// Uppercases ASCII letters only; other characters pass through unchanged.
fn uppercase_name(name: &str) -> String {
    name.chars().map(|c| c.to_ascii_uppercase()).collect()
}

fn value_column(flag: &Flag<'_>) -> String {
    match flag.value_name() {
        Some(value_name) => value_name.to_owned(),
        None => uppercase_name(flag.name()),
    }
}

impl Registry<'_> {
    /// Renders the default help text, one entry per option in registration order.
    pub fn render_help(&self, program: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Usage: {} ...", program);
        for flag in &self.flags {
            let _ = write!(out, "    {}{}", OPTION_PREFIX, flag.name());
            if let Some(alias) = self.aliases.alias_for(flag.name()) {
                let _ = write!(out, ", {}{}", OPTION_PREFIX, alias);
            }
            if flag.takes_value() && self.settings.show_types {
                let _ = write!(out, " {}", value_column(flag));
            }
            out.push('\n');
            if !flag.help().is_empty() {
                let _ = writeln!(out, "        {}", flag.help());
            }
        }
        out
    }
}
