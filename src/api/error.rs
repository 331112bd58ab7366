// ==========================================
// 仓储设施管理系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎/配置错误为用户可读的错误消息
// 约束: 三类业务失败 (不支持的操作/未找到/容量不足) 必须可区分
// ==========================================

use crate::config::layout::ConfigError;
use crate::domain::storage::ComponentError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
///
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务结果错误 (可恢复,逐次调用隔离)
    // ==========================================
    /// 在储物格上执行容器操作
    #[error("不支持的操作: {0}")]
    UnsupportedOperation(String),

    /// 首次适配搜索耗尽,全树无空闲储物格
    #[error("容量不足: {0}")]
    NoCapacity(String),

    /// 全树无匹配物品
    #[error("未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 输入与配置错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    ConfigurationError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 机器可读的错误代码 (供命令分发器渲染)
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            ApiError::NoCapacity(_) => "NO_CAPACITY",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER",
        }
    }
}

// ==========================================
// 从 EngineError 转换
// 目的: 将引擎层的搜索结果转换为可区分的业务错误
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoCapacity { operation } => {
                ApiError::NoCapacity(format!("全树没有空闲储物格 (operation={})", operation))
            }
            EngineError::ItemNotFound { name } => {
                ApiError::NotFound(format!("物品(name={})不存在", name))
            }
            EngineError::Component(e) => ApiError::from(e),
        }
    }
}

// ==========================================
// 从 ComponentError 转换
// ==========================================
impl From<ComponentError> for ApiError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::UnsupportedOperation { cell_id, operation } => {
                ApiError::UnsupportedOperation(format!(
                    "储物格不能容纳子容器 (cell_id={}, operation={})",
                    cell_id, operation
                ))
            }
        }
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigurationError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_conversion() {
        // NoCapacity 转换
        let api_err: ApiError = EngineError::NoCapacity {
            operation: "place_item".to_string(),
        }
        .into();
        assert_eq!(api_err.code(), "NO_CAPACITY");
        assert!(api_err.to_string().contains("place_item"));

        // ItemNotFound 转换
        let api_err: ApiError = EngineError::ItemNotFound {
            name: "Widget".to_string(),
        }
        .into();
        assert_eq!(api_err.code(), "NOT_FOUND");
        assert!(api_err.to_string().contains("Widget"));
    }

    #[test]
    fn test_component_error_conversion() {
        let api_err: ApiError = ComponentError::UnsupportedOperation {
            cell_id: "C001".to_string(),
            operation: "add_child".to_string(),
        }
        .into();
        assert_eq!(api_err.code(), "UNSUPPORTED_OPERATION");
        assert!(api_err.to_string().contains("C001"));
    }

    #[test]
    fn test_config_error_conversion() {
        let api_err: ApiError =
            ConfigError::InvalidLayout("至少需要一个储物柜".to_string()).into();
        assert_eq!(api_err.code(), "CONFIGURATION_ERROR");
        assert!(api_err.to_string().contains("储物柜"));
    }
}
