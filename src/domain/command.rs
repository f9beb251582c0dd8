//! 명령 엔트리/핸들러 타입과 오류 분류.

use std::fmt;

use thiserror::Error;

/// 인자 토큰을 받아 출력 문자열을 계산하는 명령 핸들러.
pub type Handler = Box<dyn Fn(&[&str]) -> Result<String, CommandError>>;

/// 설명 없이 등록된 명령의 help 표기.
pub const NO_DESCRIPTION: &str = "No description provided";

/// 명령 등록/해석/실행 중 발생하는 오류.
#[derive(Debug, Error)]
pub enum CommandError {
    /// 레지스트리에 없는 명령 이름.
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// 잘못된 명령 등록. 시작 시점에만 발생한다.
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// 인자 개수 또는 형식 오류.
    #[error("{0}")]
    Argument(String),

    /// 계산 실패.
    #[error("{0}")]
    Runtime(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime(message.into())
    }
}

/// 레지스트리가 소유하는 명령 하나.
pub struct CommandEntry {
    name: String,
    description: String,
    handler: Handler,
}

impl CommandEntry {
    pub(crate) fn new(name: String, description: String, handler: Handler) -> Self {
        Self {
            name,
            description,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 등록된 설명 원문. 비어 있을 수 있다.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// help 출력용 설명. 비어 있으면 기본 문구를 쓴다.
    pub fn display_description(&self) -> &str {
        display_description(&self.description)
    }

    /// 인자 토큰으로 핸들러를 호출한다.
    pub fn invoke(&self, args: &[&str]) -> Result<String, CommandError> {
        (self.handler)(args)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub(crate) fn display_description(description: &str) -> &str {
    if description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        description
    }
}
