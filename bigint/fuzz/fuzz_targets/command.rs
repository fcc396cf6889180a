#![no_main]
use libfuzzer_sys::fuzz_target;

use bigint::{get_opts, run_bigint};
use libbigint::diagnostics::Diagnostic;
use libbigint::Command;

fuzz_target!(|line: String| {
    match Command::parse(&line) {
        Ok(command) => {
            assert_eq!(Command::parse(&command.to_string()), Ok(command));
        }
        Err(error) => {
            let diagnostic = Diagnostic::from(&error);
            assert!(diagnostic.span.lo <= diagnostic.span.hi);
            assert!(diagnostic.span.hi <= line.chars().count() + 1);
        }
    }

    let argv = vec!["bigint".to_owned(), "-q".to_owned(), line];
    if let Ok(opts) = get_opts(|app| app.get_matches_from_safe(argv), false) {
        let result = run_bigint(opts);
        assert!(result.code == 0 || result.code == 1);
    }
});
