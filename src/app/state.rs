// ==========================================
// 仓储设施管理系统 - 应用状态
// ==========================================
// 职责: 进程级命令分发所依赖的共享状态
// 约束: 存储树在启动时装配一次,由本状态独占持有至进程退出
// ==========================================

use crate::api::error::ApiResult;
use crate::api::storage_api::StorageApi;
use crate::config::layout::StorageConfig;

/// 应用状态
///
/// 持有唯一的存储API实例; 单线程同步使用,无需加锁
pub struct AppState {
    /// 存储API
    pub storage: StorageApi,
}

impl AppState {
    /// 创建应用状态
    ///
    /// # 参数
    /// - `config`: 系统配置
    pub fn new(config: StorageConfig) -> ApiResult<Self> {
        let storage = StorageApi::new(config)?;
        Ok(Self { storage })
    }
}
