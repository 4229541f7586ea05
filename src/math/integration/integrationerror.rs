use thiserror::Error;

/// 積分前置檢查與執行期間可能發生的錯誤。
///
/// `ZeroNodes`、`ZeroWorkers`、`NonFiniteBound` 屬於 invalid argument，
/// 一律在任何 `f` 求值之前回傳；合法輸入的計算結果不受影響。
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("invalid argument: node count must be at least 1")]
    ZeroNodes,

    #[error("invalid argument: worker count must be at least 1")]
    ZeroWorkers,

    #[error("invalid argument: integration bounds must be finite")]
    NonFiniteBound,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl IntegrationError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            IntegrationError::ZeroNodes
                | IntegrationError::ZeroWorkers
                | IntegrationError::NonFiniteBound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_are_flagged() {
        assert!(IntegrationError::ZeroNodes.is_invalid_argument());
        assert!(IntegrationError::ZeroWorkers.is_invalid_argument());
        assert!(IntegrationError::NonFiniteBound.is_invalid_argument());
    }

    #[test]
    fn messages_name_the_argument() {
        assert!(IntegrationError::ZeroNodes.to_string().contains("node count"));
        assert!(IntegrationError::ZeroWorkers.to_string().contains("worker count"));
    }
}
