use flag::{ParseOutcome, Registry, Rejection};

use super::diagnostic;

#[test]
fn suggestion_for_a_near_miss() {
    let (mut foo, mut bar) = (false, 0i32);
    let mut flags = Registry::new();
    flags.add(&mut foo, "foo", "").unwrap();
    flags.add(&mut bar, "bar", "").unwrap();
    flags.set_default_help();

    let d = diagnostic(flags.try_parse(&["prog", "--fooo"]));
    assert_eq!(d.outcome(), ParseOutcome::InvalidOption);
    assert_eq!(d.suggestion(), Some("foo"));
    assert_eq!(
        d.to_string(),
        "prog: unrecognized option ‘--fooo’; did you mean ‘--foo’?\n\
         Try 'prog -help' for more information."
    );
}

#[test]
fn no_suggestion_for_an_unrelated_name() {
    let mut foo = false;
    let mut flags = Registry::new();
    flags.add(&mut foo, "foo", "").unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-xyzzy"]));
    assert_eq!(d.suggestion(), None);
    assert_eq!(d.to_string(), "prog: unrecognized option ‘-xyzzy’");
}

#[test]
fn suggestions_only_come_from_option_names() {
    let mut verbose = false;
    let mut flags = Registry::new();
    flags.add(&mut verbose, "verbose", "").unwrap();
    flags.alias("colour", "verbose").unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-colours"]));
    assert_eq!(d.suggestion(), None);
}

#[test]
fn messages_per_outcome() {
    let (mut n, mut l) = (0u8, false);
    let mut flags = Registry::new();
    flags.add(&mut n, "n", "").unwrap();
    flags.add(&mut l, "l", "").unwrap();

    let missing = diagnostic(flags.try_parse(&["prog", "--n"]));
    assert_eq!(missing.to_string(), "prog: option ‘--n’ requires an argument");

    let unexpected = diagnostic(flags.try_parse(&["prog", "-l=1"]));
    assert_eq!(
        unexpected.to_string(),
        "prog: option ‘-l’ doesn't allow an argument"
    );

    let invalid = diagnostic(flags.try_parse(&["prog", "-n", "256"]));
    assert_eq!(
        invalid.to_string(),
        "prog: invalid argument ‘256’ for ‘-n’\nvalue too large"
    );
}

#[test]
fn rejection_description_is_printed() {
    let mut flags = Registry::new();
    flags
        .add_fn("color", "", |arg| match arg {
            "auto" | "always" | "never" => Ok(()),
            _ => Err(Rejection::with_description(
                "Valid arguments are: ‘auto’, ‘always’, ‘never’",
            )),
        })
        .unwrap();
    flags.set_default_help();

    let d = diagnostic(flags.try_parse(&["prog", "--color=sometimes"]));
    assert_eq!(
        d.to_string(),
        "prog: invalid argument ‘sometimes’ for ‘--color’\n\
         Valid arguments are: ‘auto’, ‘always’, ‘never’\n\
         Try 'prog -help' for more information."
    );
}

#[test]
fn one_shot_description_is_consumed() {
    let mut flags = Registry::new();
    flags.add_fn("mode", "", |_| Err(Rejection::new())).unwrap();

    flags.set_description("modes are fast and slow");
    let first = diagnostic(flags.try_parse(&["prog", "-mode", "x"]));
    assert_eq!(first.description(), Some("modes are fast and slow"));

    let second = diagnostic(flags.try_parse(&["prog", "-mode", "x"]));
    assert_eq!(second.description(), None);
    assert_eq!(second.to_string(), "prog: invalid argument ‘x’ for ‘-mode’");
}

#[test]
fn rejection_description_beats_one_shot() {
    let mut flags = Registry::new();
    flags
        .add_fn("mode", "", |_| Err(Rejection::with_description("own")))
        .unwrap();
    flags.set_description("fallback");
    let d = diagnostic(flags.try_parse(&["prog", "-mode", "x"]));
    assert_eq!(d.description(), Some("own"));
}

#[test]
fn unicode_names_round_trip_through_messages() {
    let mut flags = Registry::new();
    flags.add_fn("플래그", "", |_| Ok(())).unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-플래"]));
    assert_eq!(d.suggestion(), Some("플래그"));
    assert_eq!(
        d.to_string(),
        "prog: unrecognized option ‘-플래’; did you mean ‘-플래그’?"
    );
}
