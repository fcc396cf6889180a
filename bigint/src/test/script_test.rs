use super::*;

use libtest_mimic::{Outcome, Test};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Describes a test case running bigint with some arguments and standard input.
#[derive(Clone)]
pub struct ScriptTest {
    /// Annotation name -> Annotation message
    pub annotations: HashMap<String, String>,
    pub annotation_order: Vec<String>,
    pub args: String,
    pub input: String,
    pub stdout: String,
    pub stderr: String,
    pub exitcode: String,
}

impl ScriptTest {
    /// Creates a script test case from a .bigint test file.
    pub fn new(test_file: &Test<PathBuf>, mut content: String) -> Result<Self, String> {
        // Annotations come first, one per line.
        let mut annotations = HashMap::<String, String>::new();
        let mut annotation_order = Vec::new();
        while content.starts_with('@') {
            let line_split = match content.find('\n') {
                Some(i) => i + 1,
                None => content.len(),
            };
            let rest_content = content.split_off(line_split);
            let annotation = content;
            content = rest_content;

            let mut annotation_parts = annotation.splitn(2, ':');
            let annotation = annotation_parts.next().unwrap_or_default().trim();
            let annotation_msg = annotation_parts.next().map(|s| s.trim()).unwrap_or("");

            annotations.insert(annotation.into(), annotation_msg.into());
            annotation_order.push(annotation.into());
        }

        let clause_names = ["args", "in", "stdout", "stderr", "exitcode"];
        let mut clauses = Vec::with_capacity(clause_names.len());
        for clause in clause_names.iter() {
            let mut splits: Vec<_> = content
                .split(&format!("{}\n", get_clause_delim(clause)))
                .map(String::from)
                .collect();

            if splits.len() != 3 {
                // Args and input are optional. In bless mode, blessable clauses are filled in
                // after the run.
                if is_optional(clause) || (*BLESS && can_be_blessed(clause)) {
                    clauses.push("".into());
                    content = splits.pop().unwrap_or_default();
                    continue;
                }

                return Err(Self::missing_clause_failure(test_file, clause));
            }

            content = splits.pop().unwrap_or_default(); // next content is the last split
            let mut clause_content = splits.pop().unwrap_or_default(); // the clause is the middle

            if clause == &"in" {
                // The split input always has a trailing newline that isn't part of the input.
                // ===in
                // <input>
                //        ^ newline here
                // ===in
                clause_content.pop();
            }
            clauses.push(clause_content);
        }
        let mut clauses = clauses.into_iter();
        let mut next = || clauses.next().unwrap_or_default();

        Ok(ScriptTest {
            annotations,
            annotation_order,
            args: next(),
            input: next(),
            stdout: next(),
            stderr: next(),
            exitcode: next(),
        })
    }

    /// Executes a script test, ensuring the stdout, stderr and exit code of bigint are as
    /// expected from the test file.
    /// If run in bless mode, the test file is updated with the actual output.
    /// If run in fail-todo mode, the test fails on any @TODO annotations.
    pub fn drive_test(self, test_name: String, test_path: PathBuf) -> Outcome {
        if *FAIL_TODO && self.annotations.contains_key("@TODO") {
            return fail!("Test is marked @TODO, which the test runner is set to fail on.");
        }

        let (stdout, stderr, exitcode) = match run_bigint(&self.args, &self.input) {
            Ok(res) => res,
            Err(outcome) => return outcome,
        };

        if *BLESS {
            let blessed = self.make_bless_file(&stdout, &stderr, &exitcode);
            return match fs::write(test_path, blessed) {
                Ok(_) => Outcome::Passed,
                Err(e) => fail!("{}", e),
            };
        }

        // Right ends of blessed content may differ by a newline, so only compare trimmed ends.
        macro_rules! t {
            ($expr:expr) => {
                $expr.trim_end()
            };
        }

        let mut report = String::new();
        if t!(stdout) != t!(self.stdout) {
            report.push_str("Mismatch in stdout:\n");
            report.push_str(&diff(t!(self.stdout), t!(stdout)));
        }
        if t!(stderr) != t!(self.stderr) {
            report.push_str("Mismatch in stderr:\n");
            report.push_str(&diff(t!(self.stderr), t!(stderr)));
        }
        if t!(exitcode) != t!(self.exitcode) {
            report.push_str("Mismatch in exit code:\n");
            report.push_str(&diff(t!(self.exitcode), t!(exitcode)));
        }
        if report.is_empty() {
            return Outcome::Passed;
        }

        report.push_str(&format!(
            "Hint: If this is expected, try running `{}`.",
            get_bless_cmd(&test_name)
        ));
        fail!(report)
    }

    /// Generates the actual ("bless"ed) contents of a test case.
    fn make_bless_file(&self, stdout: &str, stderr: &str, exitcode: &str) -> String {
        let mut content = String::with_capacity(256);

        if !self.annotations.is_empty() {
            for annotation in self.annotation_order.iter() {
                match self.annotations.get(annotation) {
                    Some(msg) if !msg.is_empty() => {
                        content.push_str(&format!("{}: {}\n", annotation, msg))
                    }
                    _ => {
                        content.push_str(annotation);
                        content.push('\n');
                    }
                }
            }
            content.push('\n');
        }

        let mut push = |clause: &str, clause_content: &str| {
            let clause_delim = get_clause_delim(clause);
            content.push_str(&format!("{}\n", clause_delim));
            content.push_str(clause_content);
            if !clause_content.is_empty() && !clause_content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&format!("{}\n\n", clause_delim));
        };

        if !self.args.is_empty() {
            push("args", &self.args);
        }
        if !self.input.is_empty() {
            push("in", &self.input);
        }
        push("stdout", stdout);
        push("stderr", stderr);
        push("exitcode", exitcode);
        content.pop(); // drop trailing newline
        content
    }

    /// Describes a clause missing from a test file.
    fn missing_clause_failure(test_file: &Test<PathBuf>, clause: &str) -> String {
        let clause_delim = get_clause_delim(clause);
        let mut msg = format!(
            "{} clause missing in test case {}.\n\
            Hint: Add a\n\
            \n\
            \t{}\n\
            \t<text>\n\
            \t{}\n\
            \n\
            section to the test file.",
            clause_delim,
            real_path!(test_file.data.display()),
            clause_delim,
            clause_delim,
        );
        if can_be_blessed(clause) {
            msg.push_str(&format!(
                "\nHint: You can run `{}` to do this for you.",
                get_bless_cmd(&test_file.name)
            ));
        }
        msg
    }
}

/// Returns the delimiter for a test case clause in a .bigint test file.
fn get_clause_delim(clause: &str) -> String {
    let prefix = match clause {
        "args" => "!!!",
        "in" => "===",
        "exitcode" | "stdout" | "stderr" => "~~~",
        _ => unreachable!(),
    };
    format!("{}{}", prefix, clause)
}

/// Returns whether a clause may be left out of a test file.
fn is_optional(clause: &str) -> bool {
    matches!(clause, "args" | "in")
}

/// Returns whether a clause can be auto-generated with BLESS=1.
fn can_be_blessed(clause: &str) -> bool {
    matches!(clause, "exitcode" | "stdout" | "stderr")
}
