// ==========================================
// 仓储设施管理系统 - 存储 API
// ==========================================
// 职责: 持有存储树与租赁台账,封装引擎操作
// 约束: 只接收已验证的原始参数,只返回结构化结果,
//       从不直接写任何外部输出
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::config::layout::{LayoutConfig, StorageConfig};
use crate::domain::item::Item;
use crate::domain::rental::{Rental, RentalLedger};
use crate::domain::report::InventoryReport;
use crate::domain::storage::{RelocationNotice, StorageNode};
use crate::engine::allocator::{AllocationEngine, PlacementOutcome};
use crate::engine::reporter::ReportCollector;
use crate::engine::sorter::{SortProtocol, SortTrace};

// ==========================================
// StorageSummary - 存储概览
// ==========================================
/// 供外部渲染层展示的存储概览
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSummary {
    pub cell_count: usize,   // 储物格总数
    pub item_count: usize,   // 物品总数
    pub rental_count: usize, // 租赁记录总数
}

// ==========================================
// StorageApi - 存储 API
// ==========================================

/// 存储API
///
/// 职责:
/// 1. 进程生命周期内独占持有存储树与租赁台账
/// 2. 参数验证后委托分配/收集/整理引擎
/// 3. 以可区分的结果类型上报三类业务失败
pub struct StorageApi {
    tree: StorageNode,
    ledger: RentalLedger,
    config: StorageConfig,
    allocator: AllocationEngine,
    reporter: ReportCollector,
    sorter: SortProtocol,
}

impl StorageApi {
    /// 创建新的StorageApi实例
    ///
    /// 按布局配置装配存储树 (一次性,进程内不再重建)
    ///
    /// # 参数
    /// - `config`: 系统配置 (先校验再装配)
    pub fn new(config: StorageConfig) -> ApiResult<Self> {
        config.validate()?;
        let tree = build_tree(&config.layout)?;

        debug!(
            cell_count = config.layout.total_cell_count(),
            "存储树装配完成"
        );

        Ok(Self {
            tree,
            ledger: RentalLedger::new(),
            config,
            allocator: AllocationEngine::new(),
            reporter: ReportCollector::new(),
            sorter: SortProtocol::new(),
        })
    }

    // ==========================================
    // 命令接口
    // ==========================================

    /// 放置物品
    ///
    /// # 参数
    /// - `name`: 物品名称 (非空)
    /// - `quantity`: 数量
    ///
    /// # 返回
    /// - `Ok(PlacementOutcome)`: 物品落入首个空储物格
    /// - `Err(ApiError::NoCapacity)`: 全树无空格
    pub fn place_item(&mut self, name: &str, quantity: u32) -> ApiResult<PlacementOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("物品名称不能为空".to_string()));
        }

        let outcome = self.allocator.place_item(&mut self.tree, name, quantity)?;
        Ok(outcome)
    }

    /// 按名称移除物品
    ///
    /// # 返回
    /// - `Ok(Item)`: 被移出的物品
    /// - `Err(ApiError::NotFound)`: 全树无匹配物品
    pub fn remove_item_by_name(&mut self, name: &str) -> ApiResult<Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("物品名称不能为空".to_string()));
        }

        let removed = self.allocator.remove_item_by_name(&mut self.tree, name)?;
        Ok(removed)
    }

    /// 预订租赁 (承租方与租期取配置默认值)
    ///
    /// # 参数
    /// - `size_units`: 申请容量
    pub fn reserve_rental(&mut self, size_units: u32) -> ApiResult<Rental> {
        let renter = self.config.rental_defaults.renter_label.clone();
        let duration_days = self.config.rental_defaults.default_duration_days;
        self.reserve_rental_for(&renter, size_units, duration_days)
    }

    /// 预订租赁 (显式承租方与租期)
    ///
    /// # 参数
    /// - `renter`: 承租方名称 (非空)
    /// - `size_units`: 申请容量
    /// - `duration_days`: 租期天数 (正数)
    pub fn reserve_rental_for(
        &mut self,
        renter: &str,
        size_units: u32,
        duration_days: i64,
    ) -> ApiResult<Rental> {
        let renter = renter.trim();
        if renter.is_empty() {
            return Err(ApiError::InvalidInput("承租方名称不能为空".to_string()));
        }
        if duration_days <= 0 {
            return Err(ApiError::InvalidInput("租期必须为正数".to_string()));
        }

        let rental = self.allocator.reserve_rental(
            &self.tree,
            &mut self.ledger,
            renter,
            size_units,
            duration_days,
        )?;
        Ok(rental)
    }

    /// 搬迁: 向全部储物格通告搬迁意图 (不改变树结构)
    pub fn relocate(&self, destination: &str) -> ApiResult<Vec<RelocationNotice>> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ApiError::InvalidInput("目的地不能为空".to_string()));
        }
        Ok(self.tree.relocate(destination))
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 执行整理握手,返回事件轨迹
    pub fn sort(&self) -> SortTrace {
        self.sorter.run(&self.tree)
    }

    /// 收集库存报表 (每次请求新建)
    pub fn collect_report(&self) -> InventoryReport {
        self.reporter.collect(&self.tree)
    }

    /// 渲染整棵树的内容 (供外部渲染层输出)
    pub fn display_content(&self) -> Vec<String> {
        self.tree.display_content()
    }

    /// 存储概览
    pub fn summary(&self) -> StorageSummary {
        let mut cell_count = 0;
        self.tree.for_each_cell(&mut |_| cell_count += 1);
        StorageSummary {
            cell_count,
            item_count: self.tree.total_item_count(),
            rental_count: self.ledger.total_count(),
        }
    }

    /// 存储树 (只读,供协作方遍历)
    pub fn tree(&self) -> &StorageNode {
        &self.tree
    }

    /// 租赁台账 (只读)
    pub fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }
}

// ==========================================
// 装配辅助
// ==========================================

/// 按布局配置装配存储树
///
/// 层级约定在这里落实: 仓库容纳储物柜,储物柜容纳货架,货架容纳储物格
fn build_tree(layout: &LayoutConfig) -> ApiResult<StorageNode> {
    let mut warehouse = StorageNode::new_warehouse();

    for wardrobe_layout in &layout.wardrobes {
        let mut wardrobe = StorageNode::new_wardrobe();
        for cell_count in &wardrobe_layout.shelves {
            let mut shelf = StorageNode::new_shelf();
            for _ in 0..*cell_count {
                shelf.add_child(StorageNode::new_cell())?;
            }
            wardrobe.add_child(shelf)?;
        }
        warehouse.add_child(wardrobe)?;
    }

    Ok(warehouse)
}
