// ==========================================
// 仓储设施管理系统 - 存储树领域模型
// ==========================================
// 职责: 组合树结构与统一遍历契约
// 约束: 节点为封闭枚举,按 match 分派,禁止运行时类型探测
// 约束: 储物格是唯一叶子容器,只容纳物品,不容纳子容器
// 约束: 遍历顺序 = 深度优先 + 插入顺序
// ==========================================

use crate::domain::item::Item;
use crate::domain::types::{LeaseTermPolicy, NodeKind};
use crate::i18n;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// 组件错误
// ==========================================

/// 存储组件操作错误
///
/// 仅对调用失败,不终止进程
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// 对储物格执行容器操作
    #[error("不支持的操作: 储物格不能容纳子容器 (cell_id={cell_id}, operation={operation})")]
    UnsupportedOperation { cell_id: String, operation: String },
}

// ==========================================
// RelocationNotice - 搬迁通知
// ==========================================
// 注: move 操作不改变树结构,只向协作方通告搬迁意图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocationNotice {
    pub cell_id: String,     // 储物格ID
    pub destination: String, // 目的地描述
    pub item_count: usize,   // 受影响物品数
}

// ==========================================
// Cell - 储物格 (叶子容器)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_id: String, // 储物格ID (创建时生成)
    items: Vec<Item>,    // 物品序列 (插入顺序)
}

impl Cell {
    /// 创建空储物格
    pub fn new() -> Self {
        Self {
            cell_id: uuid::Uuid::new_v4().to_string(),
            items: Vec::new(),
        }
    }

    /// 是否为空 (物品序列长度为 0)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 物品数量
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// 物品序列 (只读)
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// 放入物品 (追加,保持插入顺序)
    pub fn add_item(&mut self, item: Item) {
        tracing::debug!(cell_id = %self.cell_id, item_name = %item.name, "储物格放入物品");
        self.items.push(item);
    }

    /// 按名称移除首个匹配物品
    ///
    /// # 返回
    /// - `Some(Item)`: 被移出的物品 (所有权转移给调用方,随后销毁)
    /// - `None`: 本格内无匹配物品
    pub fn remove_item_by_name(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.name == name)?;
        let removed = self.items.remove(pos);
        tracing::debug!(cell_id = %self.cell_id, item_name = %removed.name, "储物格移出物品");
        Some(removed)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// CompositeNode - 组合节点载荷
// ==========================================
// Warehouse / Wardrobe / Shelf 共用的子节点序列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeNode {
    pub node_id: String,            // 节点ID (创建时生成)
    pub children: Vec<StorageNode>, // 子节点序列 (插入顺序)
}

impl CompositeNode {
    fn new() -> Self {
        Self {
            node_id: uuid::Uuid::new_v4().to_string(),
            children: Vec::new(),
        }
    }
}

// ==========================================
// StorageNode - 存储节点 (封闭标签变体)
// ==========================================
// 层级约定由装配方保证: Warehouse 容纳 Wardrobe,
// Wardrobe 容纳 Shelf, Shelf 容纳 Cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StorageNode {
    Warehouse(CompositeNode),
    Wardrobe(CompositeNode),
    Shelf(CompositeNode),
    Cell(Cell),
}

impl StorageNode {
    // ==========================================
    // 构造函数
    // ==========================================

    pub fn new_warehouse() -> Self {
        StorageNode::Warehouse(CompositeNode::new())
    }

    pub fn new_wardrobe() -> Self {
        StorageNode::Wardrobe(CompositeNode::new())
    }

    pub fn new_shelf() -> Self {
        StorageNode::Shelf(CompositeNode::new())
    }

    pub fn new_cell() -> Self {
        StorageNode::Cell(Cell::new())
    }

    // ==========================================
    // 基础查询
    // ==========================================

    /// 节点类型
    pub fn kind(&self) -> NodeKind {
        match self {
            StorageNode::Warehouse(_) => NodeKind::Warehouse,
            StorageNode::Wardrobe(_) => NodeKind::Wardrobe,
            StorageNode::Shelf(_) => NodeKind::Shelf,
            StorageNode::Cell(_) => NodeKind::Cell,
        }
    }

    /// 节点ID
    pub fn node_id(&self) -> &str {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => &node.node_id,
            StorageNode::Cell(cell) => &cell.cell_id,
        }
    }

    // ==========================================
    // 统一遍历契约: add / remove
    // ==========================================

    /// 追加子节点 (保持插入顺序,不做重复检测)
    ///
    /// # 返回
    /// - `Err(ComponentError::UnsupportedOperation)`: 在储物格上调用
    pub fn add_child(&mut self, child: StorageNode) -> Result<(), ComponentError> {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => {
                node.children.push(child);
                Ok(())
            }
            StorageNode::Cell(cell) => Err(ComponentError::UnsupportedOperation {
                cell_id: cell.cell_id.clone(),
                operation: "add_child".to_string(),
            }),
        }
    }

    /// 按ID删除直接子节点 (不存在时静默跳过)
    ///
    /// # 返回
    /// - `Err(ComponentError::UnsupportedOperation)`: 在储物格上调用
    pub fn remove_child(&mut self, node_id: &str) -> Result<(), ComponentError> {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => {
                node.children.retain(|child| child.node_id() != node_id);
                Ok(())
            }
            StorageNode::Cell(cell) => Err(ComponentError::UnsupportedOperation {
                cell_id: cell.cell_id.clone(),
                operation: "remove_child".to_string(),
            }),
        }
    }

    // ==========================================
    // 统一遍历契约: move
    // ==========================================

    /// 搬迁: 递归向每个储物格通告搬迁意图
    ///
    /// 不改变树结构,只收集搬迁通知供协作方渲染
    ///
    /// # 参数
    /// - `destination`: 目的地描述
    pub fn relocate(&self, destination: &str) -> Vec<RelocationNotice> {
        let mut notices = Vec::new();
        self.collect_relocation(destination, &mut notices);
        notices
    }

    fn collect_relocation(&self, destination: &str, notices: &mut Vec<RelocationNotice>) {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => {
                for child in &node.children {
                    child.collect_relocation(destination, notices);
                }
            }
            StorageNode::Cell(cell) => {
                tracing::debug!(
                    cell_id = %cell.cell_id,
                    destination = %destination,
                    item_count = cell.item_count(),
                    "储物格内容搬迁通告"
                );
                notices.push(RelocationNotice {
                    cell_id: cell.cell_id.clone(),
                    destination: destination.to_string(),
                    item_count: cell.item_count(),
                });
            }
        }
    }

    // ==========================================
    // 统一遍历契约: display
    // ==========================================

    /// 渲染节点内容 (深度优先,插入顺序)
    ///
    /// 空储物格渲染固定的"空"标记,而不是省略
    pub fn display_content(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render(0, &mut lines);
        lines
    }

    fn render(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            StorageNode::Warehouse(node) => {
                lines.push(format!("{}{}:", indent, i18n::t("display.warehouse")));
                for child in &node.children {
                    child.render(depth + 1, lines);
                }
            }
            StorageNode::Wardrobe(node) => {
                lines.push(format!("{}{}:", indent, i18n::t("display.wardrobe")));
                for child in &node.children {
                    child.render(depth + 1, lines);
                }
            }
            StorageNode::Shelf(node) => {
                lines.push(format!("{}{}:", indent, i18n::t("display.shelf")));
                for child in &node.children {
                    child.render(depth + 1, lines);
                }
            }
            StorageNode::Cell(cell) => {
                lines.push(format!("{}{}:", indent, i18n::t("display.cell")));
                let item_indent = "  ".repeat(depth + 1);
                if cell.is_empty() {
                    lines.push(format!("{}{}", item_indent, i18n::t("display.empty_cell")));
                } else {
                    for item in cell.items() {
                        lines.push(format!(
                            "{}--{}",
                            item_indent,
                            i18n::t_with_args(
                                "display.item_line",
                                &[("name", &item.name), ("quantity", &item.quantity.to_string())],
                            )
                        ));
                    }
                }
            }
        }
    }

    // ==========================================
    // 统一遍历契约: 服务截止日期
    // ==========================================

    /// 计算服务截止日期 (节点局部,不聚合子节点)
    ///
    /// # 参数
    /// - `from`: 起算时间
    /// - `policy`: 各节点类型的固定偏移策略
    pub fn lease_end_date(&self, from: DateTime<Utc>, policy: &LeaseTermPolicy) -> DateTime<Utc> {
        from + Duration::days(policy.offset_days(self.kind()))
    }

    // ==========================================
    // 遍历辅助 (供分配引擎使用)
    // ==========================================

    /// 深度优先查找首个满足谓词的储物格 (可变借用)
    ///
    /// 命中即停,忽略其余兄弟/堂兄弟节点
    pub fn find_first_cell_mut(
        &mut self,
        predicate: &dyn Fn(&Cell) -> bool,
    ) -> Option<&mut Cell> {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => {
                for child in &mut node.children {
                    if let Some(found) = child.find_first_cell_mut(predicate) {
                        return Some(found);
                    }
                }
                None
            }
            StorageNode::Cell(cell) => {
                if predicate(cell) {
                    Some(cell)
                } else {
                    None
                }
            }
        }
    }

    /// 深度优先查找首个满足谓词的储物格 (只读)
    pub fn find_first_cell(&self, predicate: &dyn Fn(&Cell) -> bool) -> Option<&Cell> {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => {
                for child in &node.children {
                    if let Some(found) = child.find_first_cell(predicate) {
                        return Some(found);
                    }
                }
                None
            }
            StorageNode::Cell(cell) => {
                if predicate(cell) {
                    Some(cell)
                } else {
                    None
                }
            }
        }
    }

    /// 深度优先访问全部储物格 (无提前终止)
    pub fn for_each_cell(&self, visit: &mut dyn FnMut(&Cell)) {
        match self {
            StorageNode::Warehouse(node)
            | StorageNode::Wardrobe(node)
            | StorageNode::Shelf(node) => {
                for child in &node.children {
                    child.for_each_cell(visit);
                }
            }
            StorageNode::Cell(cell) => visit(cell),
        }
    }

    /// 全树物品总数
    pub fn total_item_count(&self) -> usize {
        let mut total = 0;
        self.for_each_cell(&mut |cell| total += cell.item_count());
        total
    }
}
