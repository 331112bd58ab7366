// ==========================================
// 仓储设施管理系统 - 核心库
// ==========================================
// 技术栈: Rust (单线程同步)
// 系统定位: 分层存储分配引擎 + 控制台命令分发
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与存储树
pub mod domain;

// 引擎层 - 分配/收集/整理算法
pub mod engine;

// 配置层 - 布局与默认值
pub mod config;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态与命令分发
pub mod app;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Cell, ComponentError, CompositeNode, InventoryReport, Item, LeaseTermPolicy, NodeKind,
    RelocationNotice, Rental, RentalLedger, ReportRow, StorageNode,
};

// 引擎
pub use engine::{
    AllocationEngine, EngineError, PlacementOutcome, ReportCollector, SortProtocol, SortTrace,
};

// 配置
pub use config::{LayoutConfig, StorageConfig};

// API
pub use api::{ApiError, ApiResult, StorageApi};

// 应用
pub use app::{dispatch, AppState, Command, CommandOutcome};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储设施管理系统";

// ==========================================
// 预编译检查
// ==========================================
