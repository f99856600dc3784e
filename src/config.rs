//! 図書館カタログの設定
//!
//! 読み込み順（後のものが前のものを上書きする）:
//! 1. コード内の既定値
//! 2. `config/library.{toml,json,yaml,...}`（任意）
//! 3. `config/<RUN_MODE>.{toml,...}`（任意）
//! 4. `LIBRARY__`で始まる環境変数（例: `LIBRARY__LOAN__FINE_PER_DAY=0.5`）

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;

use crate::domain::loan::{FINE_PER_DAY, LOAN_PERIOD_DAYS, LoanPolicy};

/// 設定できる貸出期間の上限（日数）
pub const MAX_LOAN_PERIOD_DAYS: i64 = 36500;
use crate::domain::{ContactInfo, Librarian, StaffId};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoanSettings {
    /// 貸出期間（日数）。0なら貸出時刻がそのまま返却期限になる
    pub loan_period_days: i64,
    /// 1日あたりの延滞料金
    pub fine_per_day: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LibrarianSettings {
    pub staff_id: u32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub salary: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `RUST_LOG`が未設定のときに使うフィルタ
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub loan: LoanSettings,
    pub librarian: LibrarianSettings,
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// 設定ファイルと環境変数から設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config: Self = Config::builder()
            .add_source(File::with_name("config/library").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// TOML文字列から設定を読み込む。書かれていない項目は既定値になる
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.loan.validate()
    }

    pub fn loan_policy(&self) -> LoanPolicy {
        LoanPolicy {
            loan_period_days: self.loan.loan_period_days,
            fine_per_day: self.loan.fine_per_day,
        }
    }
}

impl LoanSettings {
    /// 貸出期間は`0..=MAX_LOAN_PERIOD_DAYS`、延滞料金は0以上の有限値
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_LOAN_PERIOD_DAYS).contains(&self.loan_period_days) {
            return Err(ConfigError::Message(format!(
                "loan.loan_period_days must be between 0 and {}, got {}",
                MAX_LOAN_PERIOD_DAYS, self.loan_period_days
            )));
        }
        if !self.fine_per_day.is_finite() || self.fine_per_day < 0.0 {
            return Err(ConfigError::Message(format!(
                "loan.fine_per_day must be a non-negative number, got {}",
                self.fine_per_day
            )));
        }
        Ok(())
    }
}

impl LibrarianSettings {
    pub fn to_librarian(&self) -> Librarian {
        Librarian::new(
            StaffId::new(self.staff_id),
            ContactInfo::new(&self.name, &self.address, &self.email),
            self.salary,
        )
    }
}

impl Default for LoanSettings {
    fn default() -> Self {
        Self {
            loan_period_days: LOAN_PERIOD_DAYS,
            fine_per_day: FINE_PER_DAY,
        }
    }
}

impl Default for LibrarianSettings {
    fn default() -> Self {
        Self {
            staff_id: 1,
            name: "John Thomas".to_string(),
            address: "13 West St".to_string(),
            email: "johnthomash12@gmail.com".to_string(),
            salary: 50000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "rusty_library_catalog=warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserve_issue_time_due_date() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.loan_policy(), LoanPolicy::default());
        assert_eq!(config.loan.loan_period_days, 0);
        assert_eq!(config.loan.fine_per_day, 1.0);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [loan]
            loan_period_days = 14

            [librarian]
            name = "Ada Byron"
            "#,
        )
        .unwrap();

        assert_eq!(config.loan.loan_period_days, 14);
        assert_eq!(config.loan.fine_per_day, 1.0);
        assert_eq!(config.librarian.name, "Ada Byron");
        assert_eq!(config.librarian.staff_id, 1);
        assert_eq!(config.logging.filter, "rusty_library_catalog=warn");
    }

    #[test]
    fn test_to_librarian() {
        let librarian = LibrarianSettings::default().to_librarian();

        assert_eq!(librarian.staff_id(), StaffId::new(1));
        assert_eq!(librarian.salary(), 50000);
        assert_eq!(librarian.contact.email, "johnthomash12@gmail.com");
    }

    #[test]
    fn test_loan_period_out_of_range_is_rejected() {
        for days in ["1000000000", "-1", "36501"] {
            let toml = format!("[loan]\nloan_period_days = {}", days);

            assert!(
                AppConfig::from_toml(&toml).is_err(),
                "loan_period_days = {} was accepted",
                days
            );
        }
    }

    #[test]
    fn test_loan_period_upper_bound_is_accepted() {
        let config = AppConfig::from_toml("[loan]\nloan_period_days = 36500").unwrap();

        assert_eq!(config.loan.loan_period_days, MAX_LOAN_PERIOD_DAYS);
    }

    #[test]
    fn test_negative_or_nan_fine_is_rejected() {
        assert!(AppConfig::from_toml("[loan]\nfine_per_day = -0.5").is_err());
        assert!(AppConfig::from_toml("[loan]\nfine_per_day = nan").is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result = AppConfig::from_toml(
            r#"
            [loan]
            fine_per_day = "lots"
            "#,
        );

        assert!(result.is_err());
    }
}
