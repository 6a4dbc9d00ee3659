//! Resolución posicional pura: `raw_args[i]` se asigna a `schema[i]`.
//!
//! Un valor presente pero inválido nunca cae al default (`Conversion`);
//! un valor ausente toma el default o queda pendiente si es requerido.

use log::debug;
use serde_json::Value;

use super::resolved::{ResolvedArguments, ResolvedValue};
use super::schema::ArgumentSchema;
use crate::errors::BridgeError;

/// Resuelve y exige que todos los requeridos tengan valor.
pub fn resolve<S: AsRef<str>>(schema: &ArgumentSchema, raw_args: &[S]) -> Result<ResolvedArguments, BridgeError> {
    resolve_lenient(schema, raw_args)?.into_complete()
}

/// Igual que `resolve` pero devuelve los requeridos pendientes en
/// `unresolved()` en lugar de fallar. Es la entrada de `fill_missing`.
pub fn resolve_lenient<S: AsRef<str>>(schema: &ArgumentSchema,
                                      raw_args: &[S])
                                      -> Result<ResolvedArguments, BridgeError> {
    let mut out = ResolvedArguments::default();
    for (i, spec) in schema.fields().iter().enumerate() {
        match raw_args.get(i) {
            Some(raw) => {
                let value = spec.convert(raw.as_ref())?;
                out.insert(spec.name.clone(), ResolvedValue::supplied(value));
            }
            None => match (&spec.default, spec.required) {
                (Some(default), _) => out.insert(spec.name.clone(), ResolvedValue::defaulted(default.clone())),
                (None, true) => out.mark_unresolved(spec.name.clone()),
                (None, false) => out.insert(spec.name.clone(), ResolvedValue::defaulted(Value::Null)),
            },
        }
    }
    out.set_extra(raw_args.iter().skip(schema.len()).map(|s| s.as_ref().to_string()).collect());
    debug!("resolve:done fields={} supplied={} unresolved={} extra={}",
           schema.len(),
           raw_args.len().min(schema.len()),
           out.unresolved().len(),
           out.extra().len());
    Ok(out)
}
