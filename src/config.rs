//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Valores inválidos no abortan: se registran con `warn!` y se usa el default.
use bridge_core::args::convert;
use bridge_core::constants::{DEFAULT_BUFFER_PREVIEW, DEFAULT_MAX_DEPTH};
use bridge_core::{ConverterRegistry, Environment};
use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Parámetros de la salida JSON.
    pub output: OutputConfig,
    /// Si es `true`, los argumentos requeridos que falten se piden por terminal.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub max_depth: usize,
    pub pretty: bool,
    pub buffer_preview: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { output: OutputConfig { max_depth: DEFAULT_MAX_DEPTH,
                                      pretty: true,
                                      buffer_preview: DEFAULT_BUFFER_PREVIEW },
               interactive: false }
    }
}

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    Lazy::force(&DOTENV_LOADED);
    AppConfig::from_lookup(|k| env::var(k).ok())
});

impl AppConfig {
    /// Construye la configuración a partir de una función de búsqueda
    /// (el entorno del proceso en producción, un mapa en tests).
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let d = Self::default();
        Self { output: OutputConfig { max_depth: parse_or(&lookup, "HOSTBRIDGE_MAX_DEPTH", d.output.max_depth),
                                      pretty: flag_or(&lookup, "HOSTBRIDGE_PRETTY", d.output.pretty),
                                      buffer_preview: parse_or(&lookup,
                                                               "HOSTBRIDGE_BUFFER_PREVIEW",
                                                               d.output.buffer_preview) },
               interactive: flag_or(&lookup, "HOSTBRIDGE_INTERACTIVE", d.interactive) }
    }

    /// `Environment` de salida estándar con esta configuración.
    pub fn environment(&self) -> Environment {
        Environment::stdout().with_converters(ConverterRegistry::with_buffer_preview(self.output.buffer_preview))
                             .with_max_depth(self.output.max_depth)
                             .with_pretty(self.output.pretty)
    }
}

fn parse_or<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: usize) -> usize {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                                             warn!("config:invalid key={key} value={raw:?} err={e}");
                                             default
                                         }),
    }
}

fn flag_or<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: bool) -> bool {
    match lookup(key) {
        None => default,
        Some(raw) => match convert::boolean(&raw) {
            Ok(v) => v.as_bool().unwrap_or(default),
            Err(e) => {
                warn!("config:invalid key={key} value={raw:?} err={e}");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn values_are_read_and_invalid_ones_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("HOSTBRIDGE_MAX_DEPTH", "3"),
                                                        ("HOSTBRIDGE_PRETTY", "off"),
                                                        ("HOSTBRIDGE_INTERACTIVE", "quizás"),
                                                        ("HOSTBRIDGE_BUFFER_PREVIEW", "-1")]));
        assert_eq!(cfg.output.max_depth, 3);
        assert!(!cfg.output.pretty);
        assert!(!cfg.interactive);
        assert_eq!(cfg.output.buffer_preview, DEFAULT_BUFFER_PREVIEW);
    }
}
