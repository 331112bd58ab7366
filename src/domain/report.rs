// ==========================================
// 仓储设施管理系统 - 库存报表领域模型
// ==========================================
// 职责: 承载引擎遍历收集的扁平报表行
// 约束: 只追加,保持插入顺序; 渲染纯展示,不做聚合
// 约束: 每次报表请求新建,展示后即丢弃
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};

/// 固定位置标签 (层级路径占位,不含具体节点ID)
pub const FIXED_LOCATION_LABEL: &str = "Warehouse -> Wardrobe -> Shelf -> Cell";

// ==========================================
// ReportRow - 报表行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub item_name: String, // 物品名称
    pub quantity: u32,     // 数量
    pub location: String,  // 位置标签
}

// ==========================================
// InventoryReport - 库存报表
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryReport {
    rows: Vec<ReportRow>, // 报表行 (插入顺序)
}

impl InventoryReport {
    /// 创建空报表
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一行 (只追加,保持插入顺序)
    pub fn add_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// 报表行 (只读)
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 渲染报表: 页眉 + 按插入顺序的各行 + 页脚
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(i18n::t("report.header"));
        for row in &self.rows {
            lines.push(i18n::t_with_args(
                "report.row_line",
                &[
                    ("name", &row.item_name),
                    ("quantity", &row.quantity.to_string()),
                    ("location", &row.location),
                ],
            ));
        }
        lines.push(i18n::t("report.footer"));
        lines
    }
}
