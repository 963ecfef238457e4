//! `flag-demo`: registers one flag of every kind, parses the command line and
//! prints the resulting state.
//!
//! ```text
//! $ flag-demo -l --n=42 -bar qux file
//! l: yes
//! n: 42
//! bar: qux
//! scale: 1
//! Arguments: `file`
//! ```
//!
//! Set `FLAG_LOG=debug` (or `trace`) to see what the parser does.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use flag::{Registry, Rejection};

const COLOR_CHOICES: [&str; 9] = [
    "yes", "always", "force", "no", "never", "none", "auto", "tty", "if-tty",
];

const COLOR_DESCRIPTION: &str = concat!(
    "Valid arguments are:\n",
    "  - ‘always’, ‘yes’, ‘force’\n",
    "  - ‘never’, ‘no’, ‘none’\n",
    "  - ‘auto’, ‘tty’, ‘if-tty’",
);

/// Logs go to stderr so they never mix with the demo's output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("FLAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut long_flag = false;
    let mut n = 5i32;
    let mut bar = String::from("baz");
    let mut scale = 1.0f64;
    let mut quiet = false;

    let args = {
        let mut flags = Registry::new();
        flags
            .add(&mut long_flag, "l", "Long listing")
            .context("registering -l")?;
        flags
            .add(&mut n, "n", "# of iterations")
            .context("registering -n")?;
        flags
            .add(&mut bar, "bar", "a string")
            .context("registering -bar")?;
        flags
            .add(&mut scale, "scale", "scale for something")
            .context("registering -scale")?;
        flags
            .add_fn("foo", "Print value", |arg| {
                println!("foo: {}", arg);
                Ok(())
            })
            .context("registering -foo")?;
        flags
            .add_fn("color", "colorize the output", |arg| {
                if COLOR_CHOICES.iter().any(|choice| *choice == arg) {
                    Ok(())
                } else {
                    Err(Rejection::with_description(COLOR_DESCRIPTION))
                }
            })
            .context("registering -color")?;
        flags
            .add_fn("플래그", "Flag with unicode name", |_| Ok(()))
            .context("registering -플래그")?;
        flags
            .add(&mut quiet, "no-help", "")
            .context("registering -no-help")?;
        flags.alias("num", "n").context("aliasing -num")?;
        flags.set_default_help();

        flags.parse_env()
    };

    println!("l: {}", if long_flag { "yes" } else { "no" });
    println!("n: {}", n);
    println!("bar: {}", bar);
    println!("scale: {}", scale);
    if !args.is_empty() {
        println!("Arguments: `{}`", args.join("`, `"));
    }
    Ok(())
}
