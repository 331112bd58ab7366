// ==========================================
// 仓储设施管理系统 - 引擎层
// ==========================================
// 职责: 分配/收集/整理算法,共用同一遍历契约
// 约束: 每个操作原子完成 - 要么变更恰好一个储物格并成功,
//       要么零变更并返回失败结果
// ==========================================

pub mod allocator;
pub mod error;
pub mod reporter;
pub mod sorter;

// 重导出核心引擎
pub use allocator::{AllocationEngine, PlacementOutcome};
pub use error::{EngineError, EngineResult};
pub use reporter::ReportCollector;
pub use sorter::{SortEvent, SortEventType, SortProtocol, SortTrace};
