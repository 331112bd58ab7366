// ==========================================
// 仓储设施管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与存储树结构
// 约束: 不含分配算法,不含渲染控制流
// ==========================================

pub mod item;
pub mod rental;
pub mod report;
pub mod storage;
pub mod types;

// 重导出核心类型
pub use item::Item;
pub use rental::{Rental, RentalLedger};
pub use report::{InventoryReport, ReportRow, FIXED_LOCATION_LABEL};
pub use storage::{Cell, ComponentError, CompositeNode, RelocationNotice, StorageNode};
pub use types::{LeaseTermPolicy, NodeKind};
