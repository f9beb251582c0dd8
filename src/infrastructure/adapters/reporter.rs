//! 출력 리포터 포트 구현 어댑터.

use std::cell::RefCell;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::application::ports::Reporter;

/// 정상 출력은 stdout, 오류는 stderr로 보내는 콘솔 리포터.
pub struct ConsoleReporter<O = Stdout, E = Stderr> {
    out: RefCell<O>,
    err: RefCell<E>,
    color_errors: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 색상을 적용한다.
    pub fn new(color: bool) -> Self {
        let color_errors = color && io::stderr().is_terminal();
        Self::with_io(io::stdout(), io::stderr(), color_errors)
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// 출력 스트림을 외부에서 주입한다. 색상 여부는 그대로 따른다.
    pub fn with_io(out: O, err: E, color_errors: bool) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
            color_errors,
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn output(&self, text: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }

    fn error(&self, message: &str) -> Result<()> {
        let line = format!("error: {message}");
        let mut err = self.err.borrow_mut();
        if self.color_errors {
            writeln!(err, "{}", line.red())?;
        } else {
            writeln!(err, "{line}")?;
        }
        err.flush()?;
        Ok(())
    }
}

/// 버퍼에 기록된 출력 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Output(String),
    Error(String),
}

/// 출력 내용을 메모리에 모으는 리포터(라이브러리 직접 호출/테스트용).
#[derive(Debug, Default)]
pub struct BufferReporter {
    lines: RefCell<Vec<ReportLine>>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.borrow().clone()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                ReportLine::Output(text) => Some(text.clone()),
                ReportLine::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                ReportLine::Error(message) => Some(message.clone()),
                ReportLine::Output(_) => None,
            })
            .collect()
    }
}

impl Reporter for BufferReporter {
    fn output(&self, text: &str) -> Result<()> {
        self.lines
            .borrow_mut()
            .push(ReportLine::Output(text.to_string()));
        Ok(())
    }

    fn error(&self, message: &str) -> Result<()> {
        self.lines
            .borrow_mut()
            .push(ReportLine::Error(message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_reporter_splits_streams_and_prefixes_errors() {
        let reporter = ConsoleReporter::with_io(Vec::new(), Vec::new(), false);
        reporter.output("Hello, Ana!").unwrap();
        reporter.error("Command 'bogus' not found.").unwrap();
        reporter.output("Sum: 5").unwrap();

        let (out, err) = reporter.into_writers();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Ana!\nSum: 5\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: Command 'bogus' not found.\n"
        );
    }

    #[test]
    fn colored_errors_keep_prefix_and_message() {
        let reporter = ConsoleReporter::with_io(Vec::new(), Vec::new(), true);
        reporter.error("boom").unwrap();

        let (_, err) = reporter.into_writers();
        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("error: boom"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn buffer_reporter_keeps_order_and_kind() {
        let reporter = BufferReporter::new();
        reporter.output("Sum: 5").unwrap();
        reporter.error("Command 'x' not found.").unwrap();
        reporter.output("Hello, a!").unwrap();

        assert_eq!(
            reporter.lines(),
            vec![
                ReportLine::Output("Sum: 5".into()),
                ReportLine::Error("Command 'x' not found.".into()),
                ReportLine::Output("Hello, a!".into()),
            ]
        );
        assert_eq!(reporter.outputs(), ["Sum: 5", "Hello, a!"]);
        assert_eq!(reporter.errors(), ["Command 'x' not found."]);
    }
}
