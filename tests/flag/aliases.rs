use flag::{ParseOutcome, Registry};

use super::diagnostic;

fn run(argv: &[&str]) -> (bool, i32, Vec<String>) {
    let (mut verbose, mut n) = (false, 0i32);
    let rest = {
        let mut flags = Registry::new();
        flags.add(&mut verbose, "verbose", "").unwrap();
        flags.add(&mut n, "num", "").unwrap();
        flags.alias("v", "verbose").unwrap();
        flags.alias("V", "verbose").unwrap();
        flags.alias("n", "num").unwrap();
        flags.try_parse(argv).unwrap()
    };
    (verbose, n, rest)
}

#[test]
fn alias_and_canonical_agree() {
    let canonical = run(&["prog", "--verbose", "--num", "3", "f"]);
    assert_eq!(canonical, (true, 3, vec!["f".to_owned()]));
    assert_eq!(run(&["prog", "-v", "-n", "3", "f"]), canonical);
    assert_eq!(run(&["prog", "-V", "-n=3", "f"]), canonical);
}

#[test]
fn canonical_registered_after_alias() {
    let mut q = false;
    {
        let mut flags = Registry::new();
        flags.alias("q", "quiet").unwrap();
        flags.add(&mut q, "quiet", "").unwrap();
        flags.try_parse(&["prog", "-q"]).unwrap();
    }
    assert!(q);
}

#[test]
fn dangling_alias_is_unrecognized() {
    let mut flags = Registry::new();
    flags.alias("x", "missing").unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-x"]));
    assert_eq!(d.outcome(), ParseOutcome::InvalidOption);
}

#[test]
fn alias_failure_reports_the_typed_name() {
    let mut n = 0i32;
    let mut flags = Registry::new();
    flags.add(&mut n, "num", "").unwrap();
    flags.alias("n", "num").unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-n"]));
    assert_eq!(d.outcome(), ParseOutcome::MissingValue);
    assert_eq!(d.flag(), "n");
    assert_eq!(flags.aliases().alias_for("num"), Some("n"));
}
