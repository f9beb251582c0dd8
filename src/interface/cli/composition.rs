//! 애플리케이션 조립(composition root) 모듈.

use crate::application::builtins::builtin_registry;
use crate::application::usecases::dispatch::DispatchLoop;
use crate::domain::command::CommandError;
use crate::infrastructure::adapters::{ConsoleReporter, StdinLineSource};
use crate::infrastructure::config::ShellConfig;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config: ShellConfig,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_config(ShellConfig::default())
    }
}

impl AppComposition {
    /// 설정을 외부에서 주입한다.
    pub fn with_config(config: ShellConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// 기본 명령표로 디스패치 루프를 만든다.
    /// 명령표 등록 실패는 프로그래밍 오류이므로 그대로 반환한다.
    pub fn dispatch_loop(&self) -> Result<DispatchLoop, CommandError> {
        let dispatch = DispatchLoop::new(builtin_registry()?);
        Ok(match &self.config.farewell {
            Some(farewell) => dispatch.with_farewell(farewell.clone()),
            None => dispatch,
        })
    }

    /// 프롬프트를 출력하는 stdin 입력 어댑터.
    pub fn line_source(&self) -> StdinLineSource {
        StdinLineSource::new(self.config.prompt.clone())
    }

    pub fn reporter(&self) -> ConsoleReporter {
        ConsoleReporter::new(self.config.color)
    }
}
