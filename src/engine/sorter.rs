// ==========================================
// 仓储设施管理系统 - 整理协议引擎
// ==========================================
// 职责: 三级遍历/确认握手 (仓库→储物柜→货架→储物格)
// 约束: 只遍历与确认,不重排任何序列
// ==========================================

use crate::domain::storage::StorageNode;
use crate::domain::types::NodeKind;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// 整理事件类型
// ==========================================

/// 整理握手事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortEventType {
    /// 整理请求受理 (根节点)
    Requested,
    /// 上级向下级下达整理指令
    Delegated,
    /// 下级向上级回执确认
    Confirmed,
    /// 整理全部完成
    Completed,
}

impl SortEventType {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            SortEventType::Requested => "Requested",
            SortEventType::Delegated => "Delegated",
            SortEventType::Confirmed => "Confirmed",
            SortEventType::Completed => "Completed",
        }
    }
}

// ==========================================
// 整理事件
// ==========================================

/// 整理握手事件
///
/// source/target 标记握手双方所在层级, node_id 标记消息关联的节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortEvent {
    pub event_type: SortEventType,     // 事件类型
    pub source: NodeKind,              // 发起方层级
    pub target: Option<NodeKind>,      // 接收方层级 (请求/完成事件为 None)
    pub node_id: Option<String>,       // 关联节点ID
}

impl SortEvent {
    /// 创建受理事件
    pub fn requested() -> Self {
        Self {
            event_type: SortEventType::Requested,
            source: NodeKind::Warehouse,
            target: None,
            node_id: None,
        }
    }

    /// 创建下达事件
    pub fn delegated(source: NodeKind, target: NodeKind, node_id: &str) -> Self {
        Self {
            event_type: SortEventType::Delegated,
            source,
            target: Some(target),
            node_id: Some(node_id.to_string()),
        }
    }

    /// 创建回执事件
    pub fn confirmed(source: NodeKind, target: NodeKind, node_id: &str) -> Self {
        Self {
            event_type: SortEventType::Confirmed,
            source,
            target: Some(target),
            node_id: Some(node_id.to_string()),
        }
    }

    /// 创建完成事件
    pub fn completed() -> Self {
        Self {
            event_type: SortEventType::Completed,
            source: NodeKind::Warehouse,
            target: None,
            node_id: None,
        }
    }
}

// ==========================================
// SortTrace - 整理轨迹
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortTrace {
    pub events: Vec<SortEvent>, // 事件序列 (发生顺序)
}

impl SortTrace {
    /// 按类型统计事件数
    pub fn count_of(&self, event_type: SortEventType) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }
}

// ==========================================
// SortProtocol - 整理协议
// ==========================================
pub struct SortProtocol {
    // 无状态引擎,不需要注入依赖
}

impl SortProtocol {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 执行整理握手
    ///
    /// 深度优先按插入顺序走三级结构: 每个储物柜/货架/储物格
    /// 各收到一条下达事件并回执一条确认事件; 不重排任何子序列
    ///
    /// # 返回
    /// 完整的握手事件轨迹
    #[instrument(skip_all)]
    pub fn run(&self, tree: &StorageNode) -> SortTrace {
        let mut trace = SortTrace::default();
        trace.events.push(SortEvent::requested());

        if let StorageNode::Warehouse(root) = tree {
            for wardrobe in &root.children {
                let StorageNode::Wardrobe(wardrobe_node) = wardrobe else {
                    // 层级约定外的子节点不参与握手
                    continue;
                };
                trace.events.push(SortEvent::delegated(
                    NodeKind::Warehouse,
                    NodeKind::Wardrobe,
                    &wardrobe_node.node_id,
                ));

                for shelf in &wardrobe_node.children {
                    let StorageNode::Shelf(shelf_node) = shelf else {
                        continue;
                    };
                    trace.events.push(SortEvent::delegated(
                        NodeKind::Wardrobe,
                        NodeKind::Shelf,
                        &shelf_node.node_id,
                    ));

                    for cell in &shelf_node.children {
                        let StorageNode::Cell(cell_node) = cell else {
                            continue;
                        };
                        trace.events.push(SortEvent::delegated(
                            NodeKind::Shelf,
                            NodeKind::Cell,
                            &cell_node.cell_id,
                        ));
                        trace.events.push(SortEvent::confirmed(
                            NodeKind::Cell,
                            NodeKind::Shelf,
                            &cell_node.cell_id,
                        ));
                    }

                    trace.events.push(SortEvent::confirmed(
                        NodeKind::Shelf,
                        NodeKind::Wardrobe,
                        &shelf_node.node_id,
                    ));
                }

                trace.events.push(SortEvent::confirmed(
                    NodeKind::Wardrobe,
                    NodeKind::Warehouse,
                    &wardrobe_node.node_id,
                ));
            }
        }

        trace.events.push(SortEvent::completed());
        tracing::debug!(event_count = trace.events.len(), "整理握手完成");
        trace
    }
}

impl Default for SortProtocol {
    fn default() -> Self {
        Self::new()
    }
}
