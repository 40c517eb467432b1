//! Hand-written mapping between [`Triangle`] and its JSON document.
//!
//! ```text
//! {
//!   "A": { "X": 0.0, "Y": 0.0 },
//!   "B": { "X": 4.0, "Y": 0.0 },
//!   "C": { "X": 0.0, "Y": 3.0 }
//! }
//! ```
//!
//! Unknown keys are ignored on read. Non-finite coordinates have no JSON
//! representation and are rejected on write.

use crate::domain::model::{Point, Triangle};
use crate::utils::error::{Result, TrigonError};
use serde_json::{Map, Value};

const VERTEX_KEYS: [&str; 3] = ["A", "B", "C"];
const X_KEY: &str = "X";
const Y_KEY: &str = "Y";

pub fn to_json_value(triangle: &Triangle) -> Result<Value> {
    let mut root = Map::new();
    for (key, vertex) in VERTEX_KEYS.iter().zip(triangle.vertices()) {
        root.insert(key.to_string(), point_to_value(key, vertex)?);
    }
    Ok(Value::Object(root))
}

pub fn from_json_value(value: &Value) -> Result<Triangle> {
    let root = value.as_object().ok_or_else(|| malformed("$", "expected an object"))?;

    let mut vertices = [Point::ORIGIN; 3];
    for (slot, key) in vertices.iter_mut().zip(VERTEX_KEYS) {
        let vertex = root
            .get(key)
            .ok_or_else(|| malformed(key, "missing vertex"))?;
        *slot = point_from_value(key, vertex)?;
    }

    let [a, b, c] = vertices;
    Ok(Triangle::new(a, b, c))
}

/// Pretty-printed with two-space indentation.
pub fn to_json_string(triangle: &Triangle) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(triangle)?)?)
}

pub fn from_json_str(content: &str) -> Result<Triangle> {
    let value: Value = serde_json::from_str(content)?;
    from_json_value(&value)
}

fn point_to_value(vertex_key: &str, point: Point) -> Result<Value> {
    let mut obj = Map::new();
    for (key, coord) in [(X_KEY, point.x), (Y_KEY, point.y)] {
        let number = serde_json::Number::from_f64(coord).ok_or_else(|| {
            TrigonError::NonFiniteCoordinate {
                field: format!("{}.{}", vertex_key, key),
            }
        })?;
        obj.insert(key.to_string(), Value::Number(number));
    }
    Ok(Value::Object(obj))
}

fn point_from_value(vertex_key: &str, value: &Value) -> Result<Point> {
    let obj = value
        .as_object()
        .ok_or_else(|| malformed(vertex_key, "expected an object with X and Y"))?;

    let coord = |key: &str| -> Result<f64> {
        let field = format!("{}.{}", vertex_key, key);
        match obj.get(key) {
            None => Err(malformed(&field, "missing coordinate")),
            Some(v) => v
                .as_f64()
                .ok_or_else(|| malformed(&field, &format!("expected a number, found {}", v))),
        }
    };

    Ok(Point::new(coord(X_KEY)?, coord(Y_KEY)?))
}

fn malformed(field: &str, reason: &str) -> TrigonError {
    TrigonError::MalformedDocument {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
