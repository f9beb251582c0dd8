//! 명령 이름 → 엔트리 매핑.
//! 조회는 이름 기준, help 목록은 최초 등록 순서를 유지한다.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::command::{CommandEntry, CommandError};

#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설명 없이 명령을 등록한다.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> Result<(), CommandError>
    where
        F: Fn(&[&str]) -> Result<String, CommandError> + 'static,
    {
        self.register_described(name, handler, "")
    }

    /// 명령을 등록한다. 같은 이름이 있으면 덮어쓴다(last write wins).
    /// 덮어쓴 엔트리는 help 목록에서 기존 위치를 유지한다.
    pub fn register_described<F>(
        &mut self,
        name: impl Into<String>,
        handler: F,
        description: impl Into<String>,
    ) -> Result<(), CommandError>
    where
        F: Fn(&[&str]) -> Result<String, CommandError> + 'static,
    {
        let name = name.into();
        // 공백만 있는 이름은 토큰화 후 절대 매칭되지 않는다.
        if name.trim().is_empty() {
            return Err(CommandError::InvalidCommand {
                reason: "command name must not be empty".to_string(),
            });
        }

        let entry = CommandEntry::new(name.clone(), description.into(), Box::new(handler));
        match self.index.get(&name) {
            Some(&idx) => {
                debug!(command = %name, "replacing registered command");
                self.entries[idx] = entry;
            }
            None => {
                debug!(command = %name, "registering command");
                self.index.insert(name, self.entries.len());
                self.entries.push(entry);
            }
        }
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&CommandEntry, CommandError> {
        self.index
            .get(name)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| CommandError::UnknownCommand {
                name: name.to_string(),
            })
    }

    /// help 목록용 (이름, 설명) 쌍을 등록 순서대로 반환한다.
    pub fn list_all(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name(), e.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: &'static str) -> impl Fn(&[&str]) -> Result<String, CommandError> {
        move |_| Ok(value.to_string())
    }

    #[test]
    fn resolve_returns_registered_entry() {
        let mut registry = Registry::new();
        registry
            .register_described("ping", constant("pong"), "Replies pong.")
            .unwrap();

        let entry = registry.resolve("ping").unwrap();
        assert_eq!(entry.name(), "ping");
        assert_eq!(entry.description(), "Replies pong.");
        assert_eq!(entry.invoke(&[]).unwrap(), "pong");
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let registry = Registry::new();
        let err = registry.resolve("bogus").unwrap_err();
        assert!(matches!(err, CommandError::UnknownCommand { ref name } if name == "bogus"));
    }

    #[test]
    fn reregistration_overwrites_and_keeps_position() {
        let mut registry = Registry::new();
        registry.register_described("a", constant("first"), "A1").unwrap();
        registry.register_described("b", constant("b"), "B").unwrap();
        registry.register_described("a", constant("second"), "A2").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("a").unwrap().invoke(&[]).unwrap(), "second");
        assert_eq!(registry.list_all(), vec![("a", "A2"), ("b", "B")]);
    }

    #[test]
    fn empty_or_blank_name_is_rejected() {
        let mut registry = Registry::new();
        for name in ["", "   "] {
            let err = registry.register(name, constant("x")).unwrap_err();
            assert!(matches!(err, CommandError::InvalidCommand { .. }));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn register_without_description_stores_empty_text() {
        let mut registry = Registry::new();
        registry.register("quiet", constant("")).unwrap();
        assert_eq!(registry.resolve("quiet").unwrap().description(), "");
    }

    #[test]
    fn list_all_follows_registration_order() {
        let mut registry = Registry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(name, constant("")).unwrap();
        }
        let names: Vec<&str> = registry.list_all().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
