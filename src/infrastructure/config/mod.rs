//! 쉘 세션 설정 모듈.
//! 파일/환경변수 없이 기본값으로 구성하고, 진단용 JSON 표현을 제공한다.

mod types;

use anyhow::Result;

pub use types::{DEFAULT_FAREWELL, DEFAULT_PROMPT, ShellConfig};

impl ShellConfig {
    /// 진단 로그용 JSON 표현을 반환한다.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
