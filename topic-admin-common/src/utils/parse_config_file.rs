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

use std::fmt::Debug;
use std::path::Path;

use config::Config;
use serde::de::DeserializeOwned;
use topic_admin_error::TopicAdminResult;

/// Load a configuration file into `C`.
///
/// The format is picked from the file extension (`toml`, `json`, `yaml`).
/// Fields absent from the file fall back to `C`'s serde defaults.
pub fn parse_config_file<C>(config_file: impl AsRef<Path>) -> TopicAdminResult<C>
where
    C: Debug + DeserializeOwned,
{
    let cfg = Config::builder()
        .add_source(config::File::from(config_file.as_ref()))
        .build()?;
    let parsed = cfg.try_deserialize::<C>()?;
    Ok(parsed)
}
