use std::collections::HashMap;

/// Key of the flag that is `true` until the first update+render pass has run.
pub const GAME_FIRST_CYCLE: &str = "GAME_FIRST_CYCLE";

/// Value stored in [`GameData`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Per-game key/value store for flags and small bits of shared state.
#[derive(Debug, Clone, Default)]
pub struct GameData(HashMap<String, DataValue>);

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: DataValue) -> Option<DataValue> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<DataValue> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// `None` if missing or not a bool.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            DataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            DataValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            DataValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            DataValue::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn set_bool(&mut self, key: &str, v: bool) {
        self.0.insert(key.to_string(), DataValue::Bool(v));
    }

    pub fn set_int(&mut self, key: &str, v: i64) {
        self.0.insert(key.to_string(), DataValue::Int(v));
    }

    pub fn set_float(&mut self, key: &str, v: f64) {
        self.0.insert(key.to_string(), DataValue::Float(v));
    }

    pub fn set_str(&mut self, key: &str, v: impl Into<String>) {
        self.0.insert(key.to_string(), DataValue::Str(v.into()));
    }
}
