//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

/// 한 줄 단위 입력 공급 포트.
pub trait LineSource {
    /// 다음 입력 줄을 읽는다. 입력이 끝나면 `None`.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// 콘솔/버퍼 출력 추상화 포트.
pub trait Reporter {
    /// 명령 결과 등 정상 출력.
    fn output(&self, text: &str) -> Result<()>;
    /// 사용자에게 보여줄 복구 가능한 오류.
    fn error(&self, message: &str) -> Result<()>;
}
