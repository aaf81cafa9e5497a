//! Configuration Loader
//!
//! 環境変数とJSON設定ファイルから資格情報とエンドポイントを読み込む。
//! ファイルにあるキーが環境変数より優先される。

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapter::powerbi::endpoints::{AUTHORITY_HOST, POWER_BI_API_BASE, POWER_BI_APP_BASE};
use crate::domain::entities::credential::Credential;

/// `--config` が無いときに探す設定ファイル
pub const DEFAULT_CONFIG_FILE: &str = "./powerbi_config.json";

/// (設定キー, 環境変数, 代替の環境変数)
const CREDENTIAL_ENV: [(&str, &str, &str); 3] = [
    ("tenant_id", "POWERBI_TENANT_ID", "PBI_TENANT_ID"),
    ("client_id", "POWERBI_CLIENT_ID", "PBI_CLIENT_ID"),
    ("client_secret", "POWERBI_CLIENT_SECRET", "PBI_CLIENT_SECRET"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub api_base: String,
    pub authority_host: String,
    pub app_base: String,
}

// JSONファイルの内容（全キー省略可）
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    api_base: Option<String>,
    authority_host: Option<String>,
    app_base: Option<String>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn credential_value(&self, key: &str) -> Option<&String> {
        match key {
            "tenant_id" => self.tenant_id.as_ref(),
            "client_id" => self.client_id.as_ref(),
            "client_secret" => self.client_secret.as_ref(),
            _ => None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// プロセスの環境変数と設定ファイルから読み込む
    ///
    /// `path` が無い場合は `./powerbi_config.json` があれば使う
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                let expanded = PathBuf::from(shellexpand::tilde(path).to_string());
                if !expanded.exists() {
                    bail!("Config file not found: {}", expanded.display());
                }
                Some(expanded)
            }
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };

        Self::from_sources(|name| std::env::var(name).ok(), file.as_deref())
    }

    /// 環境変数の参照関数と設定ファイルから組み立てる
    ///
    /// # Errors
    ///
    /// 資格情報のキーが1つでも欠けていれば、欠けた全キーと設定すべき環境変数を列挙して失敗する
    pub fn from_sources(lookup: impl Fn(&str) -> Option<String>, file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(path) => ConfigFile::read(path)?,
            None => ConfigFile::default(),
        };

        let mut values = Vec::with_capacity(CREDENTIAL_ENV.len());
        let mut missing = Vec::new();
        for (key, env, fallback) in CREDENTIAL_ENV {
            let value = non_empty(file.credential_value(key).cloned())
                .or_else(|| non_empty(lookup(env)))
                .or_else(|| non_empty(lookup(fallback)));
            match value {
                Some(value) => values.push(value),
                None => missing.push((key, env)),
            }
        }

        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|(key, _)| *key).collect();
            let envs: Vec<&str> = missing.iter().map(|(_, env)| *env).collect();
            bail!(
                "Missing configuration: {}. Set {} or add the keys to {}",
                keys.join(", "),
                envs.join(", "),
                DEFAULT_CONFIG_FILE
            );
        }

        let [tenant_id, client_id, client_secret]: [String; 3] = values
            .try_into()
            .map_err(|_| anyhow!("Incomplete credential configuration"))?;
        Ok(Self {
            tenant_id,
            client_id,
            client_secret,
            api_base: non_empty(file.api_base).unwrap_or_else(|| POWER_BI_API_BASE.to_string()),
            authority_host: non_empty(file.authority_host)
                .unwrap_or_else(|| AUTHORITY_HOST.to_string()),
            app_base: non_empty(file.app_base).unwrap_or_else(|| POWER_BI_APP_BASE.to_string()),
        })
    }

    pub fn credential(&self) -> Credential {
        Credential::new(
            self.tenant_id.clone(),
            self.client_id.clone(),
            self.client_secret.clone(),
        )
    }
}
