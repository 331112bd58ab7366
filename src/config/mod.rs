// ==========================================
// 仓储设施管理系统 - 配置层
// ==========================================
// 职责: 系统配置管理,启动布局与默认值
// ==========================================

pub mod layout;

// 重导出核心配置类型
pub use layout::{ConfigError, LayoutConfig, RentalDefaults, StorageConfig, WardrobeLayout};
