// ==========================================
// 仓储设施管理系统 - 物品领域模型
// ==========================================
// 职责: 定义物品实体
// 约束: 物品由持有它的储物格独占所有,移出即销毁
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Item - 物品
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String, // 物品ID (创建时生成)
    pub name: String,    // 物品名称
    pub quantity: u32,   // 数量 (>= 0)
}

impl Item {
    /// 创建物品,ID 在创建时生成
    ///
    /// # 参数
    /// - `name`: 物品名称
    /// - `quantity`: 数量
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            item_id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            quantity,
        }
    }
}
