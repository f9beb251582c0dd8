//! 입력 줄 공급 포트 구현 어댑터.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::LineSource;

/// 프롬프트를 출력하고 입력 스트림에서 한 줄씩 읽는 어댑터.
/// 기본 구성은 stdin/stdout이다.
pub struct StdinLineSource<R = StdinLock<'static>, W = Stdout> {
    prompt: String,
    input: R,
    output: W,
}

impl StdinLineSource {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_io(prompt, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinLineSource<R, W> {
    /// 입출력 스트림을 외부에서 주입한다.
    pub fn with_io(prompt: impl Into<String>, input: R, output: W) -> Self {
        Self {
            prompt: prompt.into(),
            input,
            output,
        }
    }

    /// 프롬프트가 기록된 출력 스트림을 돌려받는다.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineSource for StdinLineSource<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read input line")?;
        if read == 0 {
            // 프롬프트 뒤에 줄바꿈을 남겨 셸 프롬프트가 붙지 않게 한다.
            writeln!(self.output)?;
            self.output.flush()?;
            return Ok(None);
        }

        // 잘못된 UTF-8도 사용자 입력일 뿐이므로 대체 문자로 바꿔 계속 진행한다.
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(err) => {
                debug!("input line is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        Ok(Some(trim_newline(line)))
    }
}

/// 미리 정해 둔 줄을 순서대로 공급하는 어댑터(라이브러리 직접 호출/테스트용).
#[derive(Debug, Default)]
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
}

impl ScriptedLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// 아직 읽히지 않은 줄 수.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn trim_newline_strips_crlf_only_at_end() {
        assert_eq!(trim_newline("greet a\r\n".to_string()), "greet a");
        assert_eq!(trim_newline("add 1 2\n".to_string()), "add 1 2");
        assert_eq!(trim_newline("exit".to_string()), "exit");
    }

    #[test]
    fn prompts_before_every_read_and_ends_with_newline_on_eof() {
        let mut source = StdinLineSource::with_io(
            "Enter command: ",
            Cursor::new(b"greet Ana\r\nexit\n".to_vec()),
            Vec::new(),
        );

        assert_eq!(source.read_line().unwrap().as_deref(), Some("greet Ana"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("exit"));
        assert_eq!(source.read_line().unwrap(), None);
        assert_eq!(
            String::from_utf8(source.into_output()).unwrap(),
            "Enter command: Enter command: Enter command: \n"
        );
    }

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut source =
            StdinLineSource::with_io("> ", Cursor::new(b"exit".to_vec()), Vec::new());
        assert_eq!(source.read_line().unwrap().as_deref(), Some("exit"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily_and_reading_continues() {
        let mut source = StdinLineSource::with_io(
            "> ",
            Cursor::new(b"greet \xff\xfe\ngreet Ana\n".to_vec()),
            Vec::new(),
        );

        assert_eq!(
            source.read_line().unwrap().as_deref(),
            Some("greet \u{fffd}\u{fffd}")
        );
        assert_eq!(source.read_line().unwrap().as_deref(), Some("greet Ana"));
    }

    #[test]
    fn scripted_source_drains_in_order() {
        let mut source = ScriptedLineSource::new(["one", "two"]);
        assert_eq!(source.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(source.read_line().unwrap(), None);
    }
}
