/* 📖 # What does `hello` do?

`hello` prints a single greeting line to standard output:

    $ hello
    Hi, Gladys! Welcome!
    $ hello Alice
    Hi, Alice! Welcome!

The name comes from the first argument, then `GREETINGS_NAME`, then `name` in
`greetings.toml`, then the built-in default. Logs go to standard error and are
controlled by `RUST_LOG`.

Exit codes:
- 0: Success (greeting written)
- 1: Error (standard output could not be written)
*/

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use greetings_base::tracing::{debug, info, init_tracing, instrument};
use greetings_base::{ErrorKind, GreetingsError, GreetingsResult, PalHandle, RealPal};
use greetings_engine::{hello, resolve_name};

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let pal = PalHandle::new(RealPal::new(current_dir));

    if let Err(e) = run(&pal) {
        debug!(error = ?e, root_cause = %e.root_cause(), "greeting failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Resolves the name, formats the greeting and writes it to stdout.
#[instrument(skip(pal))]
fn run(pal: &PalHandle) -> GreetingsResult<()> {
    let resolved = resolve_name(pal)?;
    info!(source = %resolved.source, "greeting resolved name");
    let greeting = hello(&resolved.name);
    write_greeting(pal, &greeting)
}

fn write_greeting(pal: &PalHandle, greeting: &str) -> GreetingsResult<()> {
    let mut out = pal.stdout();
    writeln!(out, "{}", greeting)
        .and_then(|()| out.flush())
        .map_err(|source| Box::new(GreetingsError::new(ErrorKind::OutputError { source })))?;
    debug!(bytes = greeting.len() + 1, "greeting written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use greetings_base::{FilePath, MockPal};
    use greetings_engine::{CONFIG_FILE_NAME, NAME_ENV_VAR};

    fn run_with(mock: &MockPal) -> GreetingsResult<()> {
        run(&PalHandle::new(mock.clone()))
    }

    #[test]
    fn test_run_prints_default_greeting() {
        let mock = MockPal::new();
        run_with(&mock).unwrap();
        expect![[r#"
            Hi, Gladys! Welcome!
        "#]]
        .assert_eq(&mock.stdout_contents());
    }

    #[test]
    fn test_run_prints_exactly_one_line() {
        let mock = MockPal::new().with_args(["Alice"]);
        run_with(&mock).unwrap();
        let output = mock.stdout_contents();
        assert_eq!(output.lines().count(), 1);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_run_uses_argument() {
        let mock = MockPal::new().with_args(["Alice"]);
        run_with(&mock).unwrap();
        assert_eq!(mock.stdout_contents(), "Hi, Alice! Welcome!\n");
    }

    #[test]
    fn test_run_uses_environment() {
        let mock = MockPal::new().with_env_var(NAME_ENV_VAR, "Eve");
        run_with(&mock).unwrap();
        assert_eq!(mock.stdout_contents(), "Hi, Eve! Welcome!\n");
    }

    #[test]
    fn test_run_uses_config_file() {
        let mock = MockPal::new();
        mock.add_file(FilePath::from(CONFIG_FILE_NAME), b"name = \"Carol\"".to_vec());
        run_with(&mock).unwrap();
        assert_eq!(mock.stdout_contents(), "Hi, Carol! Welcome!\n");
    }

    #[test]
    fn test_run_with_empty_name() {
        let mock = MockPal::new().with_args([""]);
        run_with(&mock).unwrap();
        assert_eq!(mock.stdout_contents(), "Hi, ! Welcome!\n");
    }

    #[test]
    fn test_run_is_stable_across_runs() {
        let first = MockPal::new();
        let second = MockPal::new();
        run_with(&first).unwrap();
        run_with(&second).unwrap();
        assert_eq!(first.stdout_contents(), second.stdout_contents());
    }

    #[test]
    fn test_run_reports_output_failure() {
        let mock = MockPal::new();
        mock.fail_stdout();

        let err = run_with(&mock).unwrap_err();
        match err.kind() {
            ErrorKind::OutputError { source } => {
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("Expected OutputError, got {other:?}"),
        }
        expect!["Failed to write to standard output: mock stdout closed"]
            .assert_eq(&err.to_string());
    }
}
