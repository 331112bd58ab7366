// ==========================================
// 仓储设施管理系统 - 领域类型定义
// ==========================================
// 职责: 定义节点类型与租期策略等基础类型
// 约束: 节点类型为封闭枚举,禁止运行时类型探测
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 节点类型 (Node Kind)
// ==========================================
// 层级约定: Warehouse -> Wardrobe -> Shelf -> Cell
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Warehouse, // 仓库 (根节点)
    Wardrobe,  // 储物柜
    Shelf,     // 货架
    Cell,      // 储物格 (唯一叶子容器)
}

impl NodeKind {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Warehouse => "WAREHOUSE",
            NodeKind::Wardrobe => "WARDROBE",
            NodeKind::Shelf => "SHELF",
            NodeKind::Cell => "CELL",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 租期策略 (Lease Term Policy)
// ==========================================
// 每种容器节点按固定天数偏移计算服务截止日期
// 注: 占位策略,不由实际租赁数据推导 (Rental 除外)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseTermPolicy {
    pub warehouse_days: i64, // 仓库: +30 天
    pub wardrobe_days: i64,  // 储物柜: +15 天
    pub shelf_days: i64,     // 货架: +10 天
    pub cell_days: i64,      // 储物格: +5 天
}

impl LeaseTermPolicy {
    /// 查询指定节点类型的固定偏移天数
    pub fn offset_days(&self, kind: NodeKind) -> i64 {
        match kind {
            NodeKind::Warehouse => self.warehouse_days,
            NodeKind::Wardrobe => self.wardrobe_days,
            NodeKind::Shelf => self.shelf_days,
            NodeKind::Cell => self.cell_days,
        }
    }
}

impl Default for LeaseTermPolicy {
    fn default() -> Self {
        Self {
            warehouse_days: 30,
            wardrobe_days: 15,
            shelf_days: 10,
            cell_days: 5,
        }
    }
}
