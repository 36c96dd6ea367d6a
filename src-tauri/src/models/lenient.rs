// ============================================================================
// 宽松反序列化工具
// 外部服务返回的 JSON 字段类型并不稳定：字段类型不符时视为缺失，
// 列表中的 null / 非对象元素直接丢弃，整体解析永不失败
// ============================================================================

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// 仅接受 JSON 布尔值，其余（含 null）视为缺失
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => Some(flag),
        _ => None,
    })
}

/// 仅接受 JSON 字符串，其余视为缺失
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// 状态类字段：任何非 null 值都算有信号，非字符串取其 JSON 文本
///
/// `false` / `0` 这类取值必须保留下来，否则会被当作“没有状态”。
pub fn opt_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// 字符串字段，缺失或类型不符时为空串
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

/// 非负整数字段
pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_u64(),
        _ => None,
    })
}

/// 把任意 JSON 值解析为记录列表
///
/// 非数组（含 null）得到空列表，数组中不是对象的元素被跳过，其余元素保持原有顺序。
/// 同一字段同时以 camelCase 和 snake_case 出现时只保留一个（见
/// [`collapse_casing_duplicates`]），因此字段别名不会让整条记录解析失败。
pub fn records<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(mut map) => {
                collapse_casing_duplicates(&mut map);
                match serde_json::from_value(Value::Object(map)) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        log::warn!("Skipping malformed record: {}", err);
                        None
                    }
                }
            }
            _ => None,
        })
        .collect()
}

/// 删除与已有键只差命名风格的键
///
/// 按键名排序后先出现者胜出；大写字母排在 `_` 之前，所以 `gamePath` 优先于 `game_path`。
pub fn collapse_casing_duplicates(map: &mut Map<String, Value>) {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();

    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(snake_case(&key)) {
            log::debug!("Dropping duplicate field '{}'", key);
            map.remove(&key);
        }
    }
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
