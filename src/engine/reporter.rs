// ==========================================
// 仓储设施管理系统 - 报表收集引擎
// ==========================================
// 职责: 无条件全树遍历,聚合叶子层物品为扁平报表
// 约束: 不提前终止,每格每件物品一行
// ==========================================

use crate::domain::report::{InventoryReport, ReportRow, FIXED_LOCATION_LABEL};
use crate::domain::storage::StorageNode;
use tracing::instrument;

// ==========================================
// ReportCollector - 报表收集器
// ==========================================
pub struct ReportCollector {
    // 无状态引擎,不需要注入依赖
}

impl ReportCollector {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 收集库存报表
    ///
    /// 深度优先走完整棵树,为每个储物格内的每件物品追加一行;
    /// 聚合全部发生在遍历过程中,报表本身不再计算
    ///
    /// # 返回
    /// 遍历结束后的完整报表
    #[instrument(skip_all)]
    pub fn collect(&self, tree: &StorageNode) -> InventoryReport {
        let mut report = InventoryReport::new();

        tree.for_each_cell(&mut |cell| {
            for item in cell.items() {
                report.add_row(ReportRow {
                    item_name: item.name.clone(),
                    quantity: item.quantity,
                    location: FIXED_LOCATION_LABEL.to_string(),
                });
            }
        });

        tracing::debug!(row_count = report.row_count(), "报表收集完成");
        report
    }
}

impl Default for ReportCollector {
    fn default() -> Self {
        Self::new()
    }
}
