//! Credentials storage and management.
//!
//! Stores the signed-in session from `~/.hearting/.credentials.json`.
//! Only the access token and basic account facts are kept locally; board
//! data is always fetched from the server.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".hearting";

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// Seconds of clock skew tolerated before a token counts as expired.
const EXPIRY_SKEW_SECONDS: i64 = 10;

/// A stored Hearting session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Bearer token for API authentication.
    pub access_token: Option<String>,
    /// The signed-in user's id.
    pub user_id: Option<String>,
    /// The signed-in user's nickname, for display without a profile fetch.
    pub nickname: Option<String>,
    /// Token expiration time as Unix timestamp (seconds since epoch).
    pub expires_at: Option<i64>,
}

impl Credentials {
    /// Create new empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the credentials have an access token.
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Check if the token is expired.
    ///
    /// A token without a known expiration counts as expired so startup
    /// falls through to the reissue path.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let now = chrono::Utc::now().timestamp();
                now >= expires_at - EXPIRY_SKEW_SECONDS
            }
            None => true,
        }
    }

    /// Check if the credentials are usable (has token and not expired).
    pub fn is_valid(&self) -> bool {
        self.has_token() && !self.is_expired()
    }
}

/// Reads and writes the credentials file.
#[derive(Debug)]
pub struct CredentialsManager {
    path: PathBuf,
}

impl CredentialsManager {
    /// Manager rooted at `~/.hearting`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::at(home))
    }

    /// Manager rooted at an arbitrary directory.
    fn at(root: PathBuf) -> Self {
        Self {
            path: root.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE),
        }
    }

    /// Where the credentials file lives.
    pub fn credentials_path(&self) -> &Path {
        &self.path
    }

    /// Load credentials from disk.
    ///
    /// A missing or unreadable file presents as a signed-out state rather
    /// than an error.
    pub fn load(&self) -> Credentials {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Credentials::default(),
        };

        serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
    }

    /// Write credentials to disk.
    ///
    /// Creates the parent directory if needed and restricts the file to
    /// the owner on Unix. Returns `true` on success.
    pub fn save(&self, credentials: &Credentials) -> bool {
        if let Some(parent) = self.path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, credentials).is_err() {
            return false;
        }

        if writer.flush().is_err() {
            return false;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600));
        }

        true
    }

    /// Delete the stored session.
    ///
    /// A file that was never written counts as cleared.
    pub fn clear(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(err) => err.kind() == io::ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(temp_dir: &TempDir) -> CredentialsManager {
        CredentialsManager::at(temp_dir.path().to_path_buf())
    }

    #[test]
    fn test_credentials_default() {
        let creds = Credentials::default();
        assert!(creds.access_token.is_none());
        assert!(creds.user_id.is_none());
        assert!(creds.nickname.is_none());
        assert!(creds.expires_at.is_none());
    }

    #[test]
    fn test_credentials_has_token() {
        let mut creds = Credentials::default();
        assert!(!creds.has_token());

        creds.access_token = Some("t1".to_string());
        assert!(creds.has_token());
    }

    #[test]
    fn test_expired_without_expiration() {
        assert!(Credentials::default().is_expired());
    }

    #[test]
    fn test_expired_in_the_past() {
        let creds = Credentials {
            expires_at: Some(0),
            ..Default::default()
        };
        assert!(creds.is_expired());
    }

    #[test]
    fn test_not_expired_in_the_future() {
        let creds = Credentials {
            expires_at: Some(chrono::Utc::now().timestamp() + 3600),
            ..Default::default()
        };
        assert!(!creds.is_expired());
    }

    #[test]
    fn test_credentials_expiry_skew() {
        let mut creds = Credentials::default();
        // Nominally valid for a few more seconds, but inside the skew window
        creds.expires_at = Some(chrono::Utc::now().timestamp() + 5);
        assert!(creds.is_expired());
    }

    #[test]
    fn test_credentials_is_valid() {
        let mut creds = Credentials::default();
        assert!(!creds.is_valid());

        creds.access_token = Some("t1".to_string());
        assert!(!creds.is_valid()); // Still invalid - no expiration

        creds.expires_at = Some(chrono::Utc::now().timestamp() + 3600);
        assert!(creds.is_valid());
    }

    #[test]
    fn test_manager_resolves_home() {
        assert!(CredentialsManager::new().is_some());
    }

    #[test]
    fn test_load_missing_file_is_signed_out() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        let creds = Credentials {
            access_token: Some("t1".to_string()),
            user_id: Some("u1".to_string()),
            nickname: Some("moon".to_string()),
            expires_at: Some(1234567890),
        };

        assert!(manager.save(&creds));
        assert_eq!(manager.load(), creds);
    }

    #[test]
    fn test_clear_removes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        let creds = Credentials {
            access_token: Some("t1".to_string()),
            ..Default::default()
        };
        assert!(manager.save(&creds));
        assert!(manager.credentials_path().exists());

        assert!(manager.clear());
        assert!(!manager.credentials_path().exists());
        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_clear_without_a_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(manager_in(&temp_dir).clear());
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        let parent = manager.credentials_path().parent().unwrap().to_path_buf();
        assert!(!parent.exists());

        let creds = Credentials {
            access_token: Some("t1".to_string()),
            ..Default::default()
        };
        assert!(manager.save(&creds));
        assert!(parent.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_credentials_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        assert!(manager.save(&Credentials::default()));

        let mode = fs::metadata(manager.credentials_path())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_credentials_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        fs::create_dir_all(manager.credentials_path().parent().unwrap()).unwrap();
        fs::write(manager.credentials_path(), "not valid json").unwrap();

        // Corrupt files present as signed-out
        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_credentials_ignores_unknown_fields() {
        let json_with_extra_fields = r#"{
            "access_token": "old-token",
            "user_id": "old-user",
            "expires_at": 9999999999,
            "theme": "dark"
        }"#;

        let creds: Credentials = serde_json::from_str(json_with_extra_fields).unwrap();

        assert_eq!(creds.access_token, Some("old-token".to_string()));
        assert_eq!(creds.user_id, Some("old-user".to_string()));
        assert_eq!(creds.expires_at, Some(9999999999));
    }
}
