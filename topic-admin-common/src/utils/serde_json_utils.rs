// Copyright 2024 The Topic Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use topic_admin_error::TopicAdminResult;

pub struct SerdeJsonUtils;

impl SerdeJsonUtils {
    pub fn from_json_str<T>(json: &str) -> TopicAdminResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json<T>(value: &T) -> TopicAdminResult<String>
    where
        T: serde::Serialize,
    {
        Ok(serde_json::to_string(value)?)
    }

    pub fn to_json_pretty<T>(value: &T) -> TopicAdminResult<String>
    where
        T: serde::Serialize,
    {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serde_json::Value;

    use super::*;

    #[test]
    fn from_json_str_returns_expected_result() {
        let value: Value = SerdeJsonUtils::from_json_str(r#"{"path": "orders"}"#).unwrap();
        assert_eq!(value, json!({"path": "orders"}));
    }

    #[test]
    fn from_json_str_rejects_garbage() {
        let result: TopicAdminResult<Value> = SerdeJsonUtils::from_json_str("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn to_json_and_pretty_agree_on_content() {
        let value = json!({"path": "orders", "enablePartitioning": true});
        let compact = SerdeJsonUtils::to_json(&value).unwrap();
        let pretty = SerdeJsonUtils::to_json_pretty(&value).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        let reparsed: Value = SerdeJsonUtils::from_json_str(&pretty).unwrap();
        assert_eq!(reparsed, value);
    }
}
