//! 입력 한 줄을 읽고 토큰화/해석/실행하는 디스패치 루프 유스케이스.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::application::ports::{LineSource, Reporter};
use crate::domain::command::{CommandEntry, CommandError, display_description};
use crate::domain::registry::Registry;

const HELP_COMMAND: &str = "help";
const EXIT_COMMAND: &str = "exit";

/// 세션 상태. `Running`에서 시작해 `exit` 또는 입력 종료 시에만 `Stopped`로 바뀐다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// 입력 한 줄을 처리한 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 빈 줄. 아무것도 실행하지 않는다.
    Skipped,
    Output(String),
    /// 복구 가능한 오류 메시지. 루프는 계속된다.
    Failure(String),
    Stopped,
}

/// 레지스트리를 소유하고 세션 상태를 관리하는 디스패치 루프.
pub struct DispatchLoop {
    registry: Registry,
    state: SessionState,
    farewell: Option<String>,
}

impl DispatchLoop {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            state: SessionState::Running,
            farewell: None,
        }
    }

    /// `exit` 시 출력할 작별 문구를 지정한다.
    pub fn with_farewell(mut self, farewell: impl Into<String>) -> Self {
        self.farewell = Some(farewell.into());
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// 입력이 끝나거나 `exit`가 들어올 때까지 한 줄씩 처리한다.
    /// 사용자 입력 오류는 출력 후 계속 진행하고, 입출력 오류만 상위로 전파한다.
    pub fn run(&mut self, source: &mut dyn LineSource, reporter: &dyn Reporter) -> Result<()> {
        while self.state == SessionState::Running {
            let Some(line) = source.read_line()? else {
                debug!("input closed, stopping session");
                self.state = SessionState::Stopped;
                break;
            };

            match self.dispatch_line(&line) {
                Outcome::Skipped => {}
                Outcome::Output(text) => reporter.output(&text)?,
                Outcome::Failure(message) => reporter.error(&message)?,
                Outcome::Stopped => {
                    if let Some(farewell) = &self.farewell {
                        reporter.output(farewell)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// 입력 한 줄을 해석해 실행한다. `Stopped` 이후에는 아무것도 실행하지 않는다.
    pub fn dispatch_line(&mut self, line: &str) -> Outcome {
        if self.state == SessionState::Stopped {
            return Outcome::Stopped;
        }

        let Some((name, args)) = tokenize(line) else {
            return Outcome::Skipped;
        };

        match name {
            HELP_COMMAND => self.help(&args),
            EXIT_COMMAND => {
                debug!("exit requested");
                self.state = SessionState::Stopped;
                Outcome::Stopped
            }
            _ => self.execute(name, &args),
        }
    }

    fn help(&self, args: &[&str]) -> Outcome {
        match args {
            [] => Outcome::Output(render_command_list(&self.registry)),
            [name] => match self.registry.resolve(name) {
                Ok(entry) => Outcome::Output(format!(
                    "Help for '{}': {}",
                    entry.name(),
                    entry.display_description()
                )),
                Err(_) => Outcome::Failure(format!("No help found for '{name}'.")),
            },
            _ => Outcome::Failure("usage: help [command]".to_string()),
        }
    }

    fn execute(&self, name: &str, args: &[&str]) -> Outcome {
        let entry = match self.registry.resolve(name) {
            Ok(entry) => entry,
            Err(err) => {
                debug!(command = %name, %err, "unresolved command");
                return Outcome::Failure(format!("Command '{name}' not found."));
            }
        };

        debug!(command = %name, argc = args.len(), "dispatching");
        match invoke_isolated(entry, args) {
            Ok(text) => Outcome::Output(text),
            Err(err) => {
                debug!(command = %name, %err, "command failed");
                Outcome::Failure(format!("Error executing {name}: {err}"))
            }
        }
    }
}

/// 공백 기준으로 `(명령 이름, 인자)`로 나눈다. 빈 줄이면 `None`.
pub fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}

/// `help` 인자 없이 호출될 때의 전체 목록.
pub fn render_command_list(registry: &Registry) -> String {
    if registry.is_empty() {
        return "No commands available.".to_string();
    }

    let mut out = String::from("Available commands:");
    for (name, description) in registry.list_all() {
        out.push_str(&format!("\n- {name}: {}", display_description(description)));
    }
    out
}

// 핸들러 panic도 일반 오류로 바꿔 세션이 죽지 않게 한다.
fn invoke_isolated(entry: &CommandEntry, args: &[&str]) -> Result<String, CommandError> {
    match panic::catch_unwind(AssertUnwindSafe(|| entry.invoke(args))) {
        Ok(result) => result,
        Err(payload) => Err(CommandError::Other(anyhow!(
            "handler panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}
