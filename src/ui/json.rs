//! NDJSON output for `--json` mode: one object per line on stdout

use std::io::{self, Write};

use serde_json::{Map, Value};

/// `{"event": <kind>, "command": <command>, ...fields}`
///
/// `fields` must be an object; anything else contributes nothing.
pub fn event(kind: &str, command: &str, fields: Value) -> Value {
    let mut object = Map::new();
    object.insert("event".to_string(), Value::from(kind));
    object.insert("command".to_string(), Value::from(command));
    if let Value::Object(extra) = fields {
        object.extend(extra);
    }
    Value::Object(object)
}

pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}

pub fn emit(event: Value) -> io::Result<()> {
    write_event(&mut io::stdout().lock(), &event)
}
