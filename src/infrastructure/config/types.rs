//! 쉘 세션 설정 스키마.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "Enter command: ";
pub const DEFAULT_FAREWELL: &str = "Exiting the program.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// 매 입력 전에 출력할 프롬프트
    pub prompt: String,
    /// `exit` 시 출력할 문구. `None`이면 조용히 종료한다.
    pub farewell: Option<String>,
    /// stderr가 터미널일 때 오류를 색상으로 표시할지 여부
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            farewell: Some(DEFAULT_FAREWELL.to_string()),
            color: true,
        }
    }
}
