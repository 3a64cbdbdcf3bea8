use crate::showfib;
use crate::stderr;
use crate::stdout;

#[test]
fn test_showfib_report() {
    let out = showfib(&["5"]);

    assert!(out.status.success());
    assert_eq!(
        "Fib(1)\t= 1\nFib(2)\t= 1\nFib(3)\t= 2\nFib(4)\t= 3\nFib(5)\t= 5\n",
        stdout(&out)
    );
    assert!(stderr(&out).is_empty());
}

#[test]
fn test_showfib_empty_report() {
    for n in ["0", "-4"] {
        let out = showfib(&[n]);

        assert!(out.status.success(), "showfib {n} failed");
        assert_eq!("\n", stdout(&out));
    }
}

#[test]
fn test_showfib_profile() {
    let out = showfib(&["--profile", "20"]);

    assert!(out.status.success());
    assert!(stdout(&out).ends_with("Fib(20)\t= 6765\n"));
    assert!(stderr(&out).contains("wall = "));
}

#[test]
fn test_showfib_without_argument() {
    let out = showfib(&[]);

    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(!stderr(&out).is_empty());
}

#[test]
fn test_showfib_too_many_arguments() {
    let out = showfib(&["3", "4"]);

    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_showfib_not_a_number() {
    let out = showfib(&["three"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("three"));
}
