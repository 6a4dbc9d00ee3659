//! Recorrido de variables de entorno como `HostMap` listo para serializar.

use super::collections::HostMap;

/// Variables del proceso, ordenadas por nombre y filtradas por prefijo.
pub fn scan_env(prefix: Option<&str>) -> HostMap {
    scan_vars(std::env::vars(), prefix)
}

/// Versión pura de `scan_env` sobre un iterador arbitrario de pares.
pub fn scan_vars<I>(vars: I, prefix: Option<&str>) -> HostMap
    where I: IntoIterator<Item = (String, String)>
{
    let mut pairs: Vec<(String, String)> = vars.into_iter()
                                               .filter(|(k, _)| prefix.map_or(true, |p| k.starts_with(p)))
                                               .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    let out = HostMap::tagged("environment");
    for (k, v) in pairs {
        out.set(k, v);
    }
    out
}
