use log::{debug, info};
use serde_json::Value;

use super::{Prompt, PromptRequest};
use crate::args::{resolve_lenient, ArgumentSchema, ResolvedArguments, ResolvedValue};
use crate::errors::BridgeError;

/// Pregunta por cada campo pendiente de `resolved` y devuelve un registro
/// completo, o un único `MissingRequiredArgument` con todo lo que siga
/// pendiente tras las preguntas.
///
/// - `Some(Value::String)` se pasa por el conversor del campo (un diálogo o
///   una terminal devuelven texto); su fallo es `Conversion`.
/// - `Some(Value::Null)` equivale a cancelar.
/// - `Some(otro)` se toma tal cual.
/// - `None` aplica el default de `schema` o deja el campo pendiente. Sólo hay
///   default aquí si `schema` no es el esquema con el que se resolvió
///   `resolved` (por ejemplo un esquema de reintento con defaults nuevos).
pub fn fill_missing<P>(resolved: ResolvedArguments,
                       schema: &ArgumentSchema,
                       prompt: &mut P)
                       -> Result<ResolvedArguments, BridgeError>
    where P: Prompt + ?Sized
{
    if resolved.is_complete() {
        return Ok(resolved);
    }
    let mut out = ResolvedArguments::default();
    out.set_extra(resolved.extra().to_vec());
    for spec in schema.fields() {
        if let Some(existing) = resolved.get(&spec.name) {
            out.insert(spec.name.clone(), existing.clone());
            continue;
        }
        if !resolved.is_unresolved(&spec.name) {
            continue;
        }
        let request = PromptRequest::for_field(spec);
        match prompt.prompt(&request) {
            Some(Value::String(raw)) => {
                let value = spec.convert(&raw)?;
                out.insert(spec.name.clone(), ResolvedValue::prompted(value));
            }
            Some(Value::Null) | None => match &spec.default {
                Some(default) => out.insert(spec.name.clone(), ResolvedValue::defaulted(default.clone())),
                None => {
                    info!("prompt:cancelled field={} (no default)", spec.name);
                    out.mark_unresolved(spec.name.clone());
                }
            },
            Some(value) => out.insert(spec.name.clone(), ResolvedValue::prompted(value)),
        }
    }
    debug!("fill_missing:done still_unresolved={}", out.unresolved().len());
    out.into_complete()
}

/// Resolución posicional + relleno interactivo en una sola llamada.
pub fn resolve_interactive<S, P>(schema: &ArgumentSchema,
                                 raw_args: &[S],
                                 prompt: &mut P)
                                 -> Result<ResolvedArguments, BridgeError>
    where S: AsRef<str>,
          P: Prompt + ?Sized
{
    let partial = resolve_lenient(schema, raw_args)?;
    fill_missing(partial, schema, prompt)
}
