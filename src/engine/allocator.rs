// ==========================================
// 仓储设施管理系统 - 分配引擎
// ==========================================
// 职责: 首次适配搜索 - 放置物品 / 预订租赁 / 按名移除
// 约束: 深度优先 + 插入顺序,命中首个满足谓词的储物格即停
// 约束: 每次调用至多变更一个储物格,失败路径零变更
// ==========================================

use crate::domain::item::Item;
use crate::domain::rental::{Rental, RentalLedger};
use crate::domain::storage::{Cell, StorageNode};
use crate::engine::error::{EngineError, EngineResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// PlacementOutcome - 放置结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub item_id: String,       // 新建物品ID
    pub cell_id: String,       // 落位储物格ID
    pub assign_reason: String, // 落位原因 (JSON 字符串)
}

// ==========================================
// AllocationEngine - 分配引擎
// ==========================================
pub struct AllocationEngine {
    // 无状态引擎,不需要注入依赖
}

impl AllocationEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 放置物品: 落入遍历顺序中首个空储物格
    ///
    /// 不做部分放置、不与同名物品合并、不跨格拆分数量
    ///
    /// # 参数
    /// - `tree`: 存储树根节点 (命中时变更恰好一个储物格)
    /// - `name`: 物品名称
    /// - `quantity`: 数量
    ///
    /// # 返回
    /// - `Ok(PlacementOutcome)`: 新建物品已放入首个空格
    /// - `Err(EngineError::NoCapacity)`: 全树无空格,树保持不变
    #[instrument(skip(self, tree), fields(item_name = %name, quantity = quantity))]
    pub fn place_item(
        &self,
        tree: &mut StorageNode,
        name: &str,
        quantity: u32,
    ) -> EngineResult<PlacementOutcome> {
        let item = Item::new(name, quantity);

        match tree.find_first_cell_mut(&Cell::is_empty) {
            Some(cell) => {
                let outcome = PlacementOutcome {
                    item_id: item.item_id.clone(),
                    cell_id: cell.cell_id.clone(),
                    assign_reason: generate_assign_reason("FIRST_EMPTY_CELL", &cell.cell_id, quantity),
                };
                cell.add_item(item);
                tracing::info!(cell_id = %outcome.cell_id, "物品放置成功");
                Ok(outcome)
            }
            None => {
                tracing::warn!("放置失败: 全树没有空闲储物格");
                Err(EngineError::NoCapacity {
                    operation: "place_item".to_string(),
                })
            }
        }
    }

    /// 预订租赁: 绑定遍历顺序中首个空储物格
    ///
    /// 注: 预订不改变储物格的占用状态 (is_empty 仍为 true),
    /// 同一格随后仍可能被放置或再次预订命中
    ///
    /// # 参数
    /// - `tree`: 存储树根节点 (只读搜索)
    /// - `ledger`: 租赁台账 (命中时登记一条记录)
    /// - `renter`: 承租方名称
    /// - `size_units`: 申请容量 (仅做台账记录)
    /// - `duration_days`: 租期天数
    ///
    /// # 返回
    /// - `Ok(Rental)`: 已登记的租赁记录
    /// - `Err(EngineError::NoCapacity)`: 全树无空格,台账保持不变
    #[instrument(skip(self, tree, ledger), fields(renter = %renter, size_units, duration_days))]
    pub fn reserve_rental(
        &self,
        tree: &StorageNode,
        ledger: &mut RentalLedger,
        renter: &str,
        size_units: u32,
        duration_days: i64,
    ) -> EngineResult<Rental> {
        match tree.find_first_cell(&Cell::is_empty) {
            Some(cell) => {
                let rental = Rental::new(renter, size_units, duration_days, &cell.cell_id, Utc::now());
                ledger.register(rental.clone());
                tracing::info!(
                    rental_id = %rental.rental_id,
                    cell_id = %rental.cell_id,
                    end_date = %rental.end_date(),
                    "租赁预订成功"
                );
                Ok(rental)
            }
            None => {
                tracing::warn!("预订失败: 全树没有空闲储物格");
                Err(EngineError::NoCapacity {
                    operation: "reserve_rental".to_string(),
                })
            }
        }
    }

    /// 按名称移除物品: 删除遍历顺序中首个持有匹配物品的储物格内的首个匹配实例
    ///
    /// # 参数
    /// - `tree`: 存储树根节点 (命中时变更恰好一个储物格)
    /// - `name`: 物品名称
    ///
    /// # 返回
    /// - `Ok(Item)`: 被移出的物品 (所有权转移给调用方)
    /// - `Err(EngineError::ItemNotFound)`: 全树无匹配,树保持不变
    #[instrument(skip(self, tree), fields(item_name = %name))]
    pub fn remove_item_by_name(&self, tree: &mut StorageNode, name: &str) -> EngineResult<Item> {
        let holds_match =
            |cell: &Cell| cell.items().iter().any(|item| item.name == name);

        if let Some(cell) = tree.find_first_cell_mut(&holds_match) {
            if let Some(removed) = cell.remove_item_by_name(name) {
                tracing::info!(cell_id = %cell.cell_id, item_id = %removed.item_id, "物品移除成功");
                return Ok(removed);
            }
        }

        tracing::warn!("移除失败: 全树没有名称匹配的物品");
        Err(EngineError::ItemNotFound {
            name: name.to_string(),
        })
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 生成落位原因的 JSON 字符串
fn generate_assign_reason(reason_type: &str, cell_id: &str, quantity: u32) -> String {
    format!(
        r#"{{"reason":"{}","cell_id":"{}","quantity":{}}}"#,
        reason_type, cell_id, quantity
    )
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    /// 创建测试树: 仓库 -> 储物柜 -> {货架1 -> [格1, 格2], 货架2 -> [格3]}
    fn create_test_tree() -> StorageNode {
        let mut warehouse = StorageNode::new_warehouse();
        let mut wardrobe = StorageNode::new_wardrobe();
        let mut shelf1 = StorageNode::new_shelf();
        let mut shelf2 = StorageNode::new_shelf();

        shelf1.add_child(StorageNode::new_cell()).unwrap();
        shelf1.add_child(StorageNode::new_cell()).unwrap();
        shelf2.add_child(StorageNode::new_cell()).unwrap();
        wardrobe.add_child(shelf1).unwrap();
        wardrobe.add_child(shelf2).unwrap();
        warehouse.add_child(wardrobe).unwrap();

        warehouse
    }

    /// 按遍历顺序收集全部储物格ID
    fn collect_cell_ids(tree: &StorageNode) -> Vec<String> {
        let mut ids = Vec::new();
        tree.for_each_cell(&mut |cell| ids.push(cell.cell_id.clone()));
        ids
    }

    // ==========================================
    // 放置测试
    // ==========================================

    #[test]
    fn test_place_item_lands_in_first_empty_cell() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        let ids = collect_cell_ids(&tree);

        let outcome = engine.place_item(&mut tree, "Widget", 5).unwrap();
        assert_eq!(outcome.cell_id, ids[0]);
        assert!(outcome.assign_reason.contains("FIRST_EMPTY_CELL"));
        assert!(outcome.assign_reason.contains(&ids[0]));

        // 非空格被跳过: 第二次放置落入格2
        let outcome = engine.place_item(&mut tree, "Gadget", 2).unwrap();
        assert_eq!(outcome.cell_id, ids[1]);
    }

    #[test]
    fn test_place_item_skips_nonempty_cells() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        let ids = collect_cell_ids(&tree);

        // 人为占用格2: [格1空, 格2非空, 格3空] 时应命中格1
        tree.find_first_cell_mut(&|cell| cell.cell_id == ids[1])
            .unwrap()
            .add_item(Item::new("占位", 1));

        let outcome = engine.place_item(&mut tree, "Widget", 5).unwrap();
        assert_eq!(outcome.cell_id, ids[0]);
    }

    #[test]
    fn test_place_item_no_capacity_leaves_tree_unchanged() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();

        for name in ["A", "B", "C"] {
            engine.place_item(&mut tree, name, 1).unwrap();
        }
        assert_eq!(tree.total_item_count(), 3);

        // 全部占满后放置失败,物品总数不变
        let result = engine.place_item(&mut tree, "D", 1);
        assert!(matches!(result, Err(EngineError::NoCapacity { .. })));
        assert_eq!(tree.total_item_count(), 3);
    }

    // ==========================================
    // 预订测试
    // ==========================================

    #[test]
    fn test_reserve_rental_binds_first_empty_cell() {
        let engine = AllocationEngine::new();
        let tree = create_test_tree();
        let mut ledger = RentalLedger::new();
        let ids = collect_cell_ids(&tree);

        let rental = engine
            .reserve_rental(&tree, &mut ledger, "承租方", 50, 50)
            .unwrap();

        assert_eq!(rental.cell_id, ids[0]);
        assert_eq!(rental.size_units, 50);
        assert!(ledger.is_cell_reserved(&ids[0]));
        assert_eq!(ledger.total_count(), 1);
    }

    #[test]
    fn test_reserve_rental_does_not_occupy_cell() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        let mut ledger = RentalLedger::new();
        let ids = collect_cell_ids(&tree);

        let rental = engine
            .reserve_rental(&tree, &mut ledger, "承租方", 50, 50)
            .unwrap();
        assert_eq!(rental.cell_id, ids[0]);

        // 预订后储物格占用状态不变: 后续放置仍命中同一格
        let outcome = engine.place_item(&mut tree, "Widget", 5).unwrap();
        assert_eq!(outcome.cell_id, ids[0]);

        // 再次预订同理,命中下一空格
        let rental2 = engine
            .reserve_rental(&tree, &mut ledger, "承租方", 50, 50)
            .unwrap();
        assert_eq!(rental2.cell_id, ids[1]);
    }

    #[test]
    fn test_reserve_rental_no_capacity_leaves_ledger_unchanged() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        let mut ledger = RentalLedger::new();

        for name in ["A", "B", "C"] {
            engine.place_item(&mut tree, name, 1).unwrap();
        }

        let result = engine.reserve_rental(&tree, &mut ledger, "承租方", 50, 50);
        assert!(matches!(result, Err(EngineError::NoCapacity { .. })));
        assert_eq!(ledger.total_count(), 0);
    }

    // ==========================================
    // 移除测试
    // ==========================================

    #[test]
    fn test_remove_deletes_exactly_one_matching_item() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        let ids = collect_cell_ids(&tree);

        // 格1 和 格3 各有一件同名物品
        engine.place_item(&mut tree, "Box", 1).unwrap();
        engine.place_item(&mut tree, "Other", 1).unwrap();
        engine.place_item(&mut tree, "Box", 9).unwrap();
        assert_eq!(tree.total_item_count(), 3);

        let removed = engine.remove_item_by_name(&mut tree, "Box").unwrap();

        // 仅删除遍历顺序中首个命中 (格1 的那件),另一件保留
        assert_eq!(removed.quantity, 1);
        assert_eq!(tree.total_item_count(), 2);
        let cell3 = tree
            .find_first_cell(&|cell| cell.cell_id == ids[2])
            .unwrap();
        assert_eq!(cell3.items()[0].name, "Box");
        assert_eq!(cell3.items()[0].quantity, 9);
    }

    #[test]
    fn test_remove_not_found_leaves_tree_unchanged() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        engine.place_item(&mut tree, "Widget", 5).unwrap();

        let result = engine.remove_item_by_name(&mut tree, "Gadget");
        assert!(matches!(result, Err(EngineError::ItemNotFound { .. })));
        assert_eq!(tree.total_item_count(), 1);
    }

    // ==========================================
    // 端到端场景测试
    // ==========================================

    #[test]
    fn test_freed_cell_is_reused_in_traversal_order() {
        let engine = AllocationEngine::new();
        let mut tree = create_test_tree();
        let ids = collect_cell_ids(&tree);

        engine.place_item(&mut tree, "Widget", 5).unwrap();
        engine.place_item(&mut tree, "Gadget", 2).unwrap();
        engine.place_item(&mut tree, "Thing", 1).unwrap();
        assert!(matches!(
            engine.place_item(&mut tree, "Extra", 1),
            Err(EngineError::NoCapacity { .. })
        ));

        // 腾出格2后,下一次放置应回落到格2 (遍历顺序中首个空格)
        engine.remove_item_by_name(&mut tree, "Gadget").unwrap();
        let outcome = engine.place_item(&mut tree, "Sprocket", 3).unwrap();
        assert_eq!(outcome.cell_id, ids[1]);
    }
}
