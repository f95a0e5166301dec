//! Runtime settings read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PIEZAS_CELL_W` | 4 | terminal columns per board cell |
//! | `PIEZAS_CELL_H` | 2 | terminal rows per board cell |
//! | `PIEZAS_POLL_MS` | 250 | input poll timeout |
//! | `PIEZAS_LOG_PATH` | unset | append one line per drop attempt to this file |
//!
//! Unparseable values fall back to the default, as do cell sizes outside
//! `1..=MAX_CELL_W` / `1..=MAX_CELL_H`.

use std::time::Duration;

use crate::term::{MAX_CELL_H, MAX_CELL_W};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cell_w: u16,
    pub cell_h: u16,
    pub poll_ms: u64,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_w: 4,
            cell_h: 2,
            poll_ms: 250,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let cell_w = lookup("PIEZAS_CELL_W")
            .and_then(|s| s.trim().parse().ok())
            .filter(|w: &u16| (1..=MAX_CELL_W).contains(w))
            .unwrap_or(defaults.cell_w);

        let cell_h = lookup("PIEZAS_CELL_H")
            .and_then(|s| s.trim().parse().ok())
            .filter(|h: &u16| (1..=MAX_CELL_H).contains(h))
            .unwrap_or(defaults.cell_h);

        let poll_ms = lookup("PIEZAS_POLL_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.poll_ms);

        let log_path = lookup("PIEZAS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            cell_w,
            cell_h,
            poll_ms,
            log_path,
        }
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PIEZAS_CELL_W", "6"),
            ("PIEZAS_CELL_H", " 3 "),
            ("PIEZAS_POLL_MS", "100"),
            ("PIEZAS_LOG_PATH", "/tmp/piezas.log"),
        ]));
        assert_eq!(cfg.cell_w, 6);
        assert_eq!(cfg.cell_h, 3);
        assert_eq!(cfg.poll_timeout(), Duration::from_millis(100));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/piezas.log"));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PIEZAS_CELL_W", "wide"),
            ("PIEZAS_CELL_H", "0"),
            ("PIEZAS_POLL_MS", "-5"),
            ("PIEZAS_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn oversized_cells_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PIEZAS_CELL_W", "20000"),
            ("PIEZAS_CELL_H", "9"),
        ]));
        assert_eq!(cfg.cell_w, 4);
        assert_eq!(cfg.cell_h, 2);

        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PIEZAS_CELL_W", "16"),
            ("PIEZAS_CELL_H", "8"),
        ]));
        assert_eq!(cfg.cell_w, MAX_CELL_W);
        assert_eq!(cfg.cell_h, MAX_CELL_H);
    }
}
