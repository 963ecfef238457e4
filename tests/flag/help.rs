use flag::{ParseError, Registry};

#[test]
fn default_help_lists_options() {
    let (mut l, mut n, mut bar, mut quiet) = (false, 5i32, String::new(), false);
    let mut flags = Registry::new();
    flags.add(&mut l, "l", "Long listing").unwrap();
    flags.add(&mut n, "n", "# of iterations").unwrap();
    flags.add(&mut bar, "bar", "a string").unwrap();
    flags.add_fn("플래그", "Flag with unicode name", |_| Ok(())).unwrap();
    flags.add(&mut quiet, "no-help", "").unwrap();
    flags.alias("num", "n").unwrap();
    flags.set_default_help();

    let expected = [
        "Usage: demo ...",
        "    -l",
        "        Long listing",
        "    -n, -num int",
        "        # of iterations",
        "    -bar string",
        "        a string",
        "    -플래그 플래그",
        "        Flag with unicode name",
        "    -no-help",
        "",
    ]
    .join("\n");
    assert_eq!(flags.render_help("demo"), expected);
}

#[test]
fn types_can_be_hidden() {
    let mut n = 0i32;
    let mut flags = Registry::new();
    flags.add(&mut n, "n", "# of iterations").unwrap();
    flags.add_fn("foo", "", |_| Ok(())).unwrap();
    flags.show_types(false);
    assert_eq!(
        flags.render_help("demo"),
        "Usage: demo ...\n    -n\n        # of iterations\n    -foo\n"
    );
}

#[test]
fn custom_renderer_gets_the_program_name() {
    let seen = std::cell::Cell::new(false);
    let mut flags = Registry::new();
    flags.set_help(|program| {
        assert_eq!(program, "demo");
        seen.set(true);
    });
    assert_eq!(flags.try_parse(&["demo", "-help"]), Err(ParseError::Help));
    drop(flags);
    assert!(seen.get());
}
