//! 대화형 쉘(REPL) 인터페이스.

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::application::ports::{LineSource, Reporter};
use crate::interface::cli::composition::AppComposition;

/// stdin/stdout으로 세션을 실행한다. `exit` 또는 입력 종료 시 반환한다.
pub fn run_repl(composition: &AppComposition) -> Result<()> {
    let mut source = composition.line_source();
    let reporter = composition.reporter();
    run_session(composition, &mut source, &reporter)
}

/// 주어진 입출력 어댑터로 세션을 실행한다.
pub fn run_session(
    composition: &AppComposition,
    source: &mut dyn LineSource,
    reporter: &dyn Reporter,
) -> Result<()> {
    match composition.config().to_pretty_json() {
        Ok(json) => debug!(config = %json, "starting session"),
        Err(err) => debug!(%err, "config is not serializable"),
    }

    let mut dispatch = composition
        .dispatch_loop()
        .inspect_err(|err| error!(%err, "command table registration failed"))
        .context("failed to build command table")?;

    dispatch.run(source, reporter)?;
    debug!("session stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::infrastructure::adapters::{ConsoleReporter, StdinLineSource};

    fn run_console(input: &[u8]) -> (String, String, String) {
        let composition = AppComposition::default();
        let mut source = StdinLineSource::with_io(
            composition.config().prompt.clone(),
            Cursor::new(input.to_vec()),
            Vec::new(),
        );
        let reporter = ConsoleReporter::with_io(Vec::new(), Vec::new(), false);

        run_session(&composition, &mut source, &reporter).unwrap();

        let prompts = String::from_utf8(source.into_output()).unwrap();
        let (out, err) = reporter.into_writers();
        (
            prompts,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn console_session_writes_prompts_results_and_errors() {
        let (prompts, out, err) = run_console(b"greet Ana\nbogus\n");

        assert_eq!(prompts, "Enter command: Enter command: Enter command: \n");
        assert_eq!(out, "Hello, Ana!\n");
        assert_eq!(err, "error: Command 'bogus' not found.\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let (prompts, out, err) = run_console(b"greet \xff\xfe\ngreet Ana\nexit\ngreet Never\n");

        assert_eq!(prompts, "Enter command: ".repeat(3));
        assert_eq!(
            out,
            "Hello, \u{fffd}\u{fffd}!\nHello, Ana!\nExiting the program.\n"
        );
        assert!(err.is_empty());
    }
}
