//! Security Module
//!
//! 入力ファイルのサイズ制限を定義するモジュール。

/// 入力ファイルの最大サイズの既定値（2GB）
pub(crate) const DEFAULT_MAX_INPUT_FILE_SIZE: u64 = 2_147_483_648;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: DEFAULT_MAX_INPUT_FILE_SIZE,
        }
    }
}

impl SecurityConfig {
    /// 入力サイズの上限を指定して設定を作成
    pub fn with_max_input_file_size(max_input_file_size: u64) -> Self {
        Self {
            max_input_file_size,
        }
    }

    /// 設定を検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 設定が有効な場合
    /// * `Err(String)` - 上限が0の場合
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_file_size == 0 {
            return Err("Maximum input file size must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let config = SecurityConfig::default();
        assert_eq!(config.max_input_file_size, 2_147_483_648);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let config = SecurityConfig::with_max_input_file_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_limit() {
        let config = SecurityConfig::with_max_input_file_size(1024);
        assert_eq!(config.max_input_file_size, 1024);
        assert!(config.validate().is_ok());
    }
}
