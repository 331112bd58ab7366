// ==========================================
// 仓储设施管理系统 - 引擎层错误类型
// ==========================================
// 职责: 定义分配引擎的可恢复失败结果
// 约束: 任一失败路径都不产生部分变更
// ==========================================

use crate::domain::storage::ComponentError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 首次适配搜索耗尽: 全树没有空闲储物格
    #[error("容量不足: 全树没有空闲储物格 (operation={operation})")]
    NoCapacity { operation: String },

    /// 按名称搜索耗尽: 全树没有匹配物品
    #[error("物品未找到: 全树没有名称匹配的物品 (name={name})")]
    ItemNotFound { name: String },

    /// 存储组件操作错误
    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
