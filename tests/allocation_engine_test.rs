// ==========================================
// 分配引擎集成测试
// ==========================================
// 职责: 验证首次适配搜索在整棵存储树上的行为
// 场景: AllocationEngine + ReportCollector 组合测试
// ==========================================

use warehouse_storage::domain::item::Item;
use warehouse_storage::domain::rental::RentalLedger;
use warehouse_storage::domain::storage::StorageNode;
use warehouse_storage::engine::{AllocationEngine, EngineError, ReportCollector};

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
// 首次适配顺序测试
// ==========================================

#[test]
fn test_placement_follows_depth_first_insertion_order() {
    let engine = AllocationEngine::new();
    let mut tree = create_test_tree();
    let ids = collect_cell_ids(&tree);

    // [格1空, 格2非空, 格3空]: 放置必须命中格1,从不命中格2/格3
    tree.find_first_cell_mut(&|cell| cell.cell_id == ids[1])
        .unwrap()
        .add_item(Item::new("占位", 1));

    let outcome = engine.place_item(&mut tree, "Widget", 5).unwrap();
    assert_eq!(outcome.cell_id, ids[0]);

    // 格1 也占用后,跳过非空的格2,命中格3
    let outcome = engine.place_item(&mut tree, "Gadget", 2).unwrap();
    assert_eq!(outcome.cell_id, ids[2]);
}

#[test]
fn test_no_capacity_is_reported_and_tree_unchanged() {
    let engine = AllocationEngine::new();
    let mut tree = create_test_tree();
    let mut ledger = RentalLedger::new();

    for name in ["A", "B", "C"] {
        engine.place_item(&mut tree, name, 1).unwrap();
    }
    let before = tree.total_item_count();

    // 放置与预订都必须显式上报容量不足,且零变更
    assert!(matches!(
        engine.place_item(&mut tree, "D", 1),
        Err(EngineError::NoCapacity { .. })
    ));
    assert!(matches!(
        engine.reserve_rental(&tree, &mut ledger, "承租方", 50, 50),
        Err(EngineError::NoCapacity { .. })
    ));

    assert_eq!(tree.total_item_count(), before);
    assert_eq!(ledger.total_count(), 0);
}

// ==========================================
// 移除语义测试
// ==========================================

#[test]
fn test_removal_deletes_exactly_one_matching_item() {
    let engine = AllocationEngine::new();
    let mut tree = create_test_tree();
    let ids = collect_cell_ids(&tree);

    // 两个储物格各持有一件同名物品
    tree.find_first_cell_mut(&|cell| cell.cell_id == ids[0])
        .unwrap()
        .add_item(Item::new("Box", 1));
    tree.find_first_cell_mut(&|cell| cell.cell_id == ids[2])
        .unwrap()
        .add_item(Item::new("Box", 9));

    let removed = engine.remove_item_by_name(&mut tree, "Box").unwrap();

    // 仅删除遍历顺序中首个命中,总数恰好减一
    assert_eq!(removed.quantity, 1);
    assert_eq!(tree.total_item_count(), 1);
    let survivor = tree
        .find_first_cell(&|cell| !cell.is_empty())
        .unwrap();
    assert_eq!(survivor.cell_id, ids[2]);
    assert_eq!(survivor.items()[0].quantity, 9);
}

// ==========================================
// 报表完整性测试
// ==========================================

#[test]
fn test_report_completeness_over_all_cells() {
    let engine = AllocationEngine::new();
    let collector = ReportCollector::new();
    let mut tree = create_test_tree();

    engine.place_item(&mut tree, "Widget", 5).unwrap();
    engine.place_item(&mut tree, "Gadget", 2).unwrap();

    // 行数 = 全树物品总数,与空格数量无关
    let report = collector.collect(&tree);
    assert_eq!(report.row_count(), tree.total_item_count());
    assert_eq!(report.row_count(), 2);

    engine.remove_item_by_name(&mut tree, "Widget").unwrap();
    let report = collector.collect(&tree);
    assert_eq!(report.row_count(), 1);
    assert_eq!(report.rows()[0].item_name, "Gadget");
}

// ==========================================
// 预订语义测试
// ==========================================

#[test]
fn test_reservation_preserves_cell_vacancy() {
    let engine = AllocationEngine::new();
    let mut tree = create_test_tree();
    let mut ledger = RentalLedger::new();
    let ids = collect_cell_ids(&tree);

    let rental = engine
        .reserve_rental(&tree, &mut ledger, "承租方", 50, 50)
        .unwrap();
    assert_eq!(rental.cell_id, ids[0]);
    assert_eq!(rental.end_date(), rental.start + chrono::Duration::days(50));

    // 预订不占用储物格: 同一格仍可被后续放置与预订命中
    let rental2 = engine
        .reserve_rental(&tree, &mut ledger, "承租方", 30, 10)
        .unwrap();
    assert_eq!(rental2.cell_id, ids[0]);

    let outcome = engine.place_item(&mut tree, "Widget", 5).unwrap();
    assert_eq!(outcome.cell_id, ids[0]);

    assert_eq!(ledger.rentals_for_cell(&ids[0]).len(), 2);
}
