//! Serializador de introspección: grafo del host → árbol JSON seguro.
//!
//! Orden de decisión por nodo:
//! 1. escalar JSON → tal cual
//! 2. objeto ya en el camino → `"<circular>"`
//! 3. profundidad agotada → `"<max-depth>"`
//! 4. primer conversor que acepta el objeto → se serializa su resultado
//!    al mismo nivel
//! 5. vista de secuencia → array
//! 6. vista de mapeo → objeto (claves ilegibles se omiten con un `warn!`)
//! 7. `{"toString": display()}`
//!
//! El único error es un conversor que falla (`BridgeError::Converter`).

use log::{debug, warn};
use serde_json::{Map, Value};

use super::context::SerializationContext;
use super::registry::ConverterRegistry;
use crate::constants::{CIRCULAR_MARKER, DEFAULT_MAX_DEPTH, MAX_CONVERSION_CHAIN, MAX_DEPTH_MARKER, TO_STRING_KEY};
use crate::errors::BridgeError;
use crate::host::{identity, HostObject, HostValue};

pub fn serialize(value: &HostValue, converters: &ConverterRegistry, max_depth: usize) -> Result<Value, BridgeError> {
    let mut ctx = SerializationContext::new(max_depth);
    let out = walk(&mut ctx, value, converters, max_depth, 0)?;
    debug!("serialize:done max_depth={max_depth}");
    Ok(out)
}

/// `serialize` con `DEFAULT_MAX_DEPTH`.
pub fn serialize_default(value: &HostValue, converters: &ConverterRegistry) -> Result<Value, BridgeError> {
    serialize(value, converters, DEFAULT_MAX_DEPTH)
}

fn walk(ctx: &mut SerializationContext,
        value: &HostValue,
        converters: &ConverterRegistry,
        depth: usize,
        chain: usize)
        -> Result<Value, BridgeError> {
    let obj = match value {
        HostValue::Null => return Ok(Value::Null),
        HostValue::Bool(b) => return Ok(Value::Bool(*b)),
        HostValue::Number(n) => return Ok(Value::Number(n.clone())),
        HostValue::String(s) => return Ok(Value::String(s.clone())),
        HostValue::Object(o) => o,
    };
    let id = identity(obj);
    if ctx.is_on_path(id) {
        return Ok(Value::String(CIRCULAR_MARKER.to_string()));
    }
    if depth == 0 || chain > MAX_CONVERSION_CHAIN {
        return Ok(Value::String(MAX_DEPTH_MARKER.to_string()));
    }
    ctx.enter(id);
    let out = walk_object(ctx, obj.as_ref(), converters, depth, chain);
    ctx.leave(id);
    out
}

fn walk_object(ctx: &mut SerializationContext,
               obj: &dyn HostObject,
               converters: &ConverterRegistry,
               depth: usize,
               chain: usize)
               -> Result<Value, BridgeError> {
    if let Some(conv) = converters.find(obj) {
        let converted = conv.apply(obj).map_err(|cause| BridgeError::Converter { tag: conv.tag().to_string(), cause })?;
        return walk(ctx, &converted, converters, depth, chain + 1);
    }
    if let Some(seq) = obj.as_sequence() {
        let len = seq.len();
        let mut items = Vec::with_capacity(len);
        for i in 0..len {
            let item = seq.item(i).unwrap_or(HostValue::Null);
            items.push(walk(ctx, &item, converters, depth - 1, 0)?);
        }
        return Ok(Value::Array(items));
    }
    if let Some(mapping) = obj.as_mapping() {
        let mut out = Map::new();
        for key in mapping.keys() {
            match mapping.get(&key) {
                Ok(item) => {
                    let v = walk(ctx, &item, converters, depth - 1, 0)?;
                    out.insert(key, v);
                }
                Err(cause) => warn!("serialize:skip key={key} tag={} cause={cause}", obj.type_tag()),
            }
        }
        return Ok(Value::Object(out));
    }
    let mut fallback = Map::new();
    fallback.insert(TO_STRING_KEY.to_string(), Value::String(obj.display()));
    Ok(Value::Object(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostBuffer, HostEnum, HostList, HostMap, HostOpaque, HostTimestamp};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn plain_graph_is_structurally_identical() {
        let v = json!({"a": 1, "b": [1, 2, {"c": "x"}]});
        let out = serialize(&HostValue::from(v.clone()), &ConverterRegistry::with_defaults(), 64).unwrap();
        assert_eq!(out, v);
        assert_eq!(out.to_string(), r#"{"a":1,"b":[1,2,{"c":"x"}]}"#);
    }

    #[test]
    fn self_reference_becomes_circular_marker() {
        let obj = Rc::new(HostMap::new());
        obj.set("name", "root");
        obj.set("self", obj.clone());
        let out = serialize_default(&HostValue::from(obj.clone()), &ConverterRegistry::new()).unwrap();
        assert_eq!(out, json!({"name": "root", "self": "<circular>"}));
        obj.clear();
    }

    #[test]
    fn shared_subobject_is_not_circular() {
        let shared = Rc::new(HostMap::new());
        shared.set("v", 1i64);
        let root = HostMap::new();
        root.set("left", shared.clone());
        root.set("right", shared);
        let out = serialize_default(&HostValue::object(root), &ConverterRegistry::new()).unwrap();
        assert_eq!(out, json!({"left": {"v": 1}, "right": {"v": 1}}));
    }

    #[test]
    fn depth_is_exhausted_one_level_in() {
        let deep = HostValue::from(json!({"a": {"b": {"c": 1}}}));
        let out = serialize(&deep, &ConverterRegistry::new(), 1).unwrap();
        assert_eq!(out, json!({"a": "<max-depth>"}));
        let out = serialize(&deep, &ConverterRegistry::new(), 0).unwrap();
        assert_eq!(out, json!("<max-depth>"));
    }

    #[test]
    fn default_converters_handle_host_leaves() {
        let root = HostMap::new();
        root.set("bytes", HostValue::object(HostBuffer(vec![1, 2, 3])));
        root.set("at", HostValue::object(HostTimestamp(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())));
        root.set("kind", HostValue::object(HostEnum::new("Kind", "FILE")));
        let out = serialize_default(&HostValue::object(root), &ConverterRegistry::with_buffer_preview(2)).unwrap();
        assert_eq!(out,
                   json!({
                       "bytes": {"type": "buffer", "length": 3, "data": [1, 2], "truncated": true},
                       "at": "2024-01-02T03:04:05.000Z",
                       "kind": "Kind.FILE"
                   }));
    }

    #[test]
    fn unknown_leaf_falls_back_to_to_string() {
        let out = serialize_default(&HostValue::object(HostOpaque::new("socket", "tcp://localhost:80")),
                                    &ConverterRegistry::new()).unwrap();
        assert_eq!(out, json!({"toString": "tcp://localhost:80"}));
    }

    #[test]
    fn failing_converter_names_its_tag() {
        let mut reg = ConverterRegistry::new();
        reg.register("socket", |o| o.type_tag() == "socket", |_| Err("closed".to_string()));
        let list: HostList = vec![HostValue::object(HostOpaque::new("socket", "s"))].into_iter().collect();
        let err = serialize_default(&HostValue::object(list), &reg).unwrap_err();
        assert_eq!(err, BridgeError::Converter { tag: "socket".into(), cause: "closed".into() });
    }

    #[test]
    fn endless_conversion_chain_is_cut() {
        let mut reg = ConverterRegistry::new();
        reg.register("loop", |o| o.type_tag() == "loop", |o| Ok(HostValue::object(HostOpaque::new(o.type_tag(), o.display()))));
        let out = serialize_default(&HostValue::object(HostOpaque::new("loop", "x")), &reg).unwrap();
        assert_eq!(out, json!("<max-depth>"));
    }
}
