use std::path::{Path, PathBuf};

use lufa_core::profile::ProfileKind;
use lufa_export::paginate::PageGeometry;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-5-20250929-v1:0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LufaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    pub model_id: String,
    pub credentials: CredentialSource,
    /// Which plan fields a response must carry. Added in v1.
    #[serde(default)]
    pub validation_profile: ProfileKind,
    /// Where exported PDFs go. Falls back to the documents directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Overrides the A4 millimetre layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_geometry: Option<PageGeometry>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

/// Redacted config info safe to print or log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub region: String,
    pub model_id: String,
    pub validation_profile: ProfileKind,
    pub output_dir: String,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
}

impl LufaConfig {
    /// The configuration written on first run: default credential chain,
    /// extended validation, A4 layout.
    pub fn first_run() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            credentials: CredentialSource::DefaultChain,
            validation_profile: ProfileKind::default(),
            output_dir: None,
            page_geometry: None,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn page_geometry(&self) -> PageGeometry {
        self.page_geometry.unwrap_or_default()
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.lufa.planner"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<LufaConfig> {
    load_config_from(&config_path()?)
}

/// Load the config stored at `path`, migrating older versions in memory.
pub fn load_config_from(path: &Path) -> eyre::Result<LufaConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: LufaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the saved config, writing [`LufaConfig::first_run`] if none exists.
pub fn load_or_init() -> eyre::Result<LufaConfig> {
    if has_config() {
        return load_config();
    }
    let config = LufaConfig::first_run();
    save_config(&config)?;
    tracing::info!("wrote first-run config");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update lufa-planner."
        ));
    }

    // v0 → v1: pin the validation profile and model that v0 builds used implicitly
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("validation_profile")
            .or_insert(serde_json::Value::String("extended".to_string()));
        obj.entry("model_id")
            .or_insert(serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added validation_profile, model_id)");
    }

    Ok(json)
}

pub fn save_config(config: &LufaConfig) -> eyre::Result<()> {
    save_config_to(&config_dir()?, config)
}

/// Write `config` as `config.json` inside `dir`.
pub fn save_config_to(dir: &Path, config: &LufaConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Inline credentials live in this file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &LufaConfig) -> ConfigInfo {
    let (credential_type, profile_name, access_key_hint) = match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            let cred_type = if session_token.is_some() {
                "temporary".to_string()
            } else {
                "inline".to_string()
            };
            (cred_type, None, Some(redact_access_key(access_key_id)))
        }
        CredentialSource::Profile { profile_name } => {
            ("profile".to_string(), Some(profile_name.clone()), None)
        }
        CredentialSource::DefaultChain => ("default_chain".to_string(), None, None),
    };

    ConfigInfo {
        region: config.region.clone(),
        model_id: config.model_id.clone(),
        validation_profile: config.validation_profile,
        output_dir: config.output_dir().display().to_string(),
        created_at: config.created_at.to_string(),
        credential_type,
        profile_name,
        access_key_hint,
    }
}

fn redact_access_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
